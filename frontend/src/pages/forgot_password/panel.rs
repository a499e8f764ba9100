use super::view_model::use_forgot_password_view_model;
use crate::{
    components::{forms::FormField, layout::AuthCard},
    router::LOGIN_PATH,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let pending = vm.submit_action.pending();

    view! {
        <Title text="Forgot Password" />
        <AuthCard title="Forgot Password">
            <p class="mt-2 text-center text-sm text-fg-muted">
                "Enter your email address and we'll send you a link to reset your password."
            </p>
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
                    value=vm.email
                    touched=vm.email_touched
                    error=vm.email_error
                />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                >
                    {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
                <div class="text-sm text-center">
                    <A href=LOGIN_PATH class="font-medium text-link hover:text-link-hover">
                        "Back to login"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}
