use leptos::*;

mod panel;
mod repository;
pub mod utils;
mod view_model;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel /> }
}
