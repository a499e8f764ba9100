use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};
use std::future::Future;
use std::time::Duration;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Points the router at `path` the way a server request would.
pub fn provide_request_path(path: &str) {
    provide_context(RouterIntegrationContext::new(ServerIntegration {
        path: format!("http://localhost{}", path),
    }));
}

/// Renders `view` inside a `<Router>` whose request URL is `path`, so `<A>`
/// links, query and location hooks resolve.
pub fn render_at<F, N>(path: &'static str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_request_path(path);
        view! { <Router>{view()}</Router> }
    })
}

/// Drives an async test on a current-thread tokio runtime inside a `LocalSet`,
/// which is where Leptos actions spawn their futures on the host.
pub fn with_local_runtime_async<F, Fut>(test: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, test());
}

/// Polls `done` until it holds or roughly two seconds have passed.
pub async fn wait_until(done: impl Fn() -> bool) {
    for _ in 0..200 {
        if done() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
