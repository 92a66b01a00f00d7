use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="not-found-container">
            <h1>"404"</h1>
            <p>"Unfortunately this page doesn't exist. Please see a sales associate for help."</p>
            <a
                href="/"
                class="back-button"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::CollectionList);
                }
            >
                "Back to Collections"
            </a>
        </div>
    }
}
