use super::view_model::use_login_view_model;
use crate::{
    components::{forms::FormField, layout::AuthCard},
    router::FORGOT_PASSWORD_PATH,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let on_redirect = Callback::new(move |url: String| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    });
    let vm = use_login_view_model(on_redirect);
    let pending = vm.login_action.pending();
    let email_error = Signal::derive(move || vm.errors.get().email);
    let password_error = Signal::derive(move || vm.errors.get().password);

    view! {
        <Title text="Login" />
        <AuthCard title="Login">
            <form
                class="mt-8 space-y-6"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=vm.form.email
                    touched=vm.form.email_touched
                    error=email_error
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=vm.form.password
                    touched=vm.form.password_touched
                    error=password_error
                />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
                <div class="text-sm text-center">
                    <A href=FORGOT_PASSWORD_PATH class="font-medium text-link hover:text-link-hover">
                        "Forgot password?"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}
