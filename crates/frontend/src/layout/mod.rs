pub mod footer;
pub mod global_context;
pub mod not_found;

use leptos::prelude::*;

/// Оболочка страницы: контент и футер
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <main class="app-main">{children()}</main>
            <footer::Footer />
        </div>
    }
}
