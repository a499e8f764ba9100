use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::alert::AlertOutlet,
    pages::{
        forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
        reset_password::ResetPasswordPage,
    },
    state::alert::provide_alert_service,
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_alert_service();
    provide_meta_context();
    view! {
        <Router>
            <AlertOutlet/>
            <main>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
                    <Route path=RESET_PASSWORD_PATH view=ResetPasswordPage/>
                </Routes>
            </main>
        </Router>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{provide_request_path, render_to_string};

    #[test]
    fn login_route_renders_login_page() {
        let html = render_to_string(|| {
            provide_request_path("/login");
            app_root()
        });
        assert!(html.contains("Forgot password?"));
        assert!(html.contains("id=\"password\""));
    }

    #[test]
    fn forgot_password_route_renders_email_form() {
        let html = render_to_string(|| {
            provide_request_path("/forgot-password");
            app_root()
        });
        assert!(html.contains("Send Reset Link"));
    }
}
