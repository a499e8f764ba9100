use crate::state::alert::{use_alert_service, Alert, AlertKind, AlertService};
use leptos::*;
use leptos_router::use_location;

fn alert_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "fa-check-circle",
        AlertKind::Error => "fa-exclamation-circle",
        AlertKind::Info => "fa-info-circle",
        AlertKind::Warning => "fa-exclamation-triangle",
    }
}

/// Renders the shared alerts and prunes them when the route changes. Must sit
/// inside the `<Router>`.
#[component]
pub fn AlertOutlet() -> impl IntoView {
    let alerts = use_alert_service();
    let location = use_location();
    prune_on_route_change(alerts, location.pathname.into());

    view! { <AlertList alerts=alerts /> }
}

/// Calls `on_route_change` each time `pathname` moves to a different path.
/// The first observed path only seeds the tracker.
pub fn prune_on_route_change(alerts: AlertService, pathname: Signal<String>) {
    create_isomorphic_effect(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|prev| prev != path) {
            alerts.on_route_change();
        }
        path
    });
}

#[component]
pub fn AlertList(alerts: AlertService) -> impl IntoView {
    let list = alerts.alerts();
    view! {
        <div class="fixed top-4 inset-x-0 z-50 mx-auto max-w-md space-y-3 px-4" role="status">
            {move || {
                list.get()
                    .into_iter()
                    .map(|alert| view! { <AlertItem alert=alert on_dismiss=move |id: uuid::Uuid| alerts.dismiss(id) /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn AlertItem(alert: Alert, #[prop(into)] on_dismiss: Callback<uuid::Uuid>) -> impl IntoView {
    let id = alert.id;
    view! {
        <div class=format!("flex items-start gap-3 p-4 rounded-lg border shadow-lg {}", alert.kind.classes())>
            <i class=format!("fas {}", alert_icon(alert.kind))></i>
            <p class="flex-1 text-sm font-medium">{alert.message}</p>
            <button
                type="button"
                class="text-sm leading-none opacity-70 hover:opacity-100"
                title="Dismiss"
                on:click=move |_| on_dismiss.call(id)
            >
                "×"
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::alert::{provide_alert_service, AlertOptions};
    use crate::test_support::ssr::{render_at, render_to_string, with_runtime};

    #[test]
    fn alert_list_renders_each_message() {
        let html = render_to_string(move || {
            let alerts = AlertService::new();
            alerts.success("Password reset successful", AlertOptions::default());
            alerts.error("Something broke");
            view! { <AlertList alerts=alerts /> }
        });
        assert!(html.contains("Password reset successful"));
        assert!(html.contains("Something broke"));
        assert!(html.contains("fa-exclamation-circle"));
    }

    #[test]
    fn alert_outlet_reads_context() {
        let html = render_at("/login", move || {
            let alerts = provide_alert_service();
            alerts.info("From context", AlertOptions::keep_after_route_change());
            view! { <AlertOutlet /> }
        });
        assert!(html.contains("From context"));
    }

    #[test]
    fn kept_alert_survives_one_navigation_only() {
        with_runtime(|| {
            let alerts = AlertService::new();
            alerts.success(
                "Password reset successful, you can now login",
                AlertOptions::keep_after_route_change(),
            );
            alerts.error("stale");
            let pathname = create_rw_signal("/reset-password".to_string());
            prune_on_route_change(alerts, pathname.into());
            assert_eq!(alerts.alerts().get().len(), 2);

            pathname.set("/login".to_string());
            let list = alerts.alerts().get();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].kind, AlertKind::Success);

            pathname.set("/login".to_string());
            assert_eq!(alerts.alerts().get().len(), 1);

            pathname.set("/".to_string());
            assert!(alerts.alerts().get().is_empty());
        });
    }
}
