use leptos::*;

/// Centered card used by every account page.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn auth_card_renders_title_and_children() {
        let html = render_to_string(move || {
            view! {
                <AuthCard title="Reset Password">
                    <LoadingSpinner />
                    <p>"body"</p>
                </AuthCard>
            }
        });
        assert!(html.contains("Reset Password"));
        assert!(html.contains("body"));
        assert!(html.contains("animate-spin"));
    }
}
