use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell>
            <AppRoutes />
        </Shell>
    }
}
