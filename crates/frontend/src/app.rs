use crate::routes::routes::AppRoutes;
use crate::shared::config::load_or_default;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoints, page size and messages for the whole tree
    provide_context(load_or_default());

    view! {
        <AppRoutes />
    }
}
