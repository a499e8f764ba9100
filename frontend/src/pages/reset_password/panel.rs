use super::{
    utils::{ResetPasswordErrors, ResetPasswordFormState, TokenStatus},
    view_model::use_reset_password_view_model,
};
use crate::{
    components::{
        forms::FormField,
        layout::{AuthCard, LoadingSpinner},
    },
    router::{FORGOT_PASSWORD_PATH, LOGIN_PATH},
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let navigate = use_navigate();
    let navigate = Callback::new(move |path: String| navigate(&path, Default::default()));
    let vm = use_reset_password_view_model(navigate);

    let query = use_query_map();
    let token = query.with_untracked(|params| params.get("token").cloned());
    vm.validate_token(token);

    let pending = vm.submit_action.pending();
    let on_submit = Callback::new(move |_: ()| {
        vm.submit();
    });

    view! {
        <Title text="Reset Password" />
        <ResetPasswordBody
            status=vm.token_status
            form=vm.form
            errors=vm.errors
            pending=pending
            on_submit=on_submit
        />
    }
}

/// Picks the view for the current token status.
#[component]
pub fn ResetPasswordBody(
    #[prop(into)] status: Signal<TokenStatus>,
    form: ResetPasswordFormState,
    #[prop(into)] errors: Signal<ResetPasswordErrors>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <AuthCard title="Reset Password">
            {move || match status.get() {
                TokenStatus::Validating => view! {
                    <div class="text-center text-fg-muted">
                        <LoadingSpinner />
                        <p>"Validating token..."</p>
                    </div>
                }
                .into_view(),
                TokenStatus::Invalid => view! {
                    <div class="rounded-md bg-status-error-bg p-4 text-sm text-status-error-text">
                        "Token validation failed, if the token has expired you can get a new one at the "
                        <A href=FORGOT_PASSWORD_PATH class="font-medium text-link hover:text-link-hover">
                            "forgot password"
                        </A>
                        " page."
                    </div>
                }
                .into_view(),
                TokenStatus::Valid => view! {
                    <ResetPasswordFormView form=form errors=errors pending=pending on_submit=on_submit />
                }
                .into_view(),
            }}
        </AuthCard>
    }
}

#[component]
fn ResetPasswordFormView(
    form: ResetPasswordFormState,
    errors: Signal<ResetPasswordErrors>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let password_error = Signal::derive(move || errors.get().password);
    let confirm_error = Signal::derive(move || errors.get().confirm_password);

    view! {
        <form
            class="mt-8 space-y-6"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <FormField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                value=form.password
                touched=form.password_touched
                error=password_error
            />
            <FormField
                id="confirmPassword"
                label="Confirm Password"
                input_type="password"
                autocomplete="new-password"
                value=form.confirm_password
                touched=form.confirm_password_touched
                error=confirm_error
            />
            <div class="flex gap-2">
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="flex w-full items-center justify-center rounded-md bg-action-primary-bg px-3 py-2.5 text-sm font-semibold text-action-primary-text shadow-sm hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    <Show when=move || pending.get()>
                        <span class="mr-3 h-4 w-4 animate-spin rounded-full border-t-2 border-current"></span>
                    </Show>
                    "Reset"
                </button>
                <A
                    href=LOGIN_PATH
                    class="flex w-full items-center justify-center rounded-md bg-action-primary-bg px-3 py-2.5 text-sm font-semibold text-action-primary-text shadow-sm hover:bg-action-primary-bg-hover"
                >
                    "Cancel"
                </A>
            </div>
        </form>
    }
}
