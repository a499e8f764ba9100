use crate::router::{FORGOT_PASSWORD_PATH, LOGIN_PATH};
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Account Portal" />
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Account Portal"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Sign in or recover access to your account."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <div class="rounded-md shadow">
                            <A href=LOGIN_PATH class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10">
                                "Login"
                            </A>
                        </div>
                        <div class="mt-3 sm:mt-0">
                            <A href=FORGOT_PASSWORD_PATH class="w-full flex items-center justify-center px-8 py-3 text-base font-medium text-link hover:text-link-hover lg:py-4 lg:text-lg">
                                "Forgot password?"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_at;

    #[test]
    fn links_to_login_and_recovery() {
        let html = render_at("/", || view! { <HomePage /> });
        assert!(html.contains("href=\"/login\""));
        assert!(html.contains("href=\"/forgot-password\""));
    }
}
