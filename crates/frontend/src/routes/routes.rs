use crate::layout::global_context::{AppGlobalContext, CatalogState};
use crate::layout::not_found::NotFound;
use crate::projections::p900_catalog_views::ui::{CollectionDetail, CollectionList, DesignVariants};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Маршруты приложения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    CollectionList,
    /// `/collection/{name}`
    CollectionDetail { collection: String },
    /// `/collection/{name}/{designId}`
    DesignVariants { collection: String, design_id: String },
    NotFound,
}

impl Route {
    /// Parses a location pathname. Segments are percent-decoded.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let decode = |s: &str| urlencoding::decode(s).ok().map(|c| c.into_owned());

        match segments.as_slice() {
            [] => Route::CollectionList,
            ["collection", name] => match decode(name) {
                Some(collection) => Route::CollectionDetail { collection },
                None => Route::NotFound,
            },
            ["collection", name, design] => match (decode(name), decode(design)) {
                (Some(collection), Some(design_id)) => Route::DesignVariants {
                    collection,
                    design_id,
                },
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::CollectionList => "/".to_string(),
            Route::CollectionDetail { collection } => {
                format!("/collection/{}", urlencoding::encode(collection))
            }
            Route::DesignVariants {
                collection,
                design_id,
            } => format!(
                "/collection/{}/{}",
                urlencoding::encode(collection),
                urlencoding::encode(design_id)
            ),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Подписка на popstate и загрузка data.json выполняются один раз
    ctx.init_router_integration();
    ctx.load_catalog();

    move || {
        let route = ctx.route.get();
        if route == Route::NotFound {
            return view! { <NotFound /> }.into_any();
        }

        match ctx.catalog.get() {
            CatalogState::Loading => view! {
                <div class="loading">"Loading catalog..."</div>
            }
            .into_any(),
            CatalogState::Failed(error) => view! {
                <div class="error-box">
                    <p class="error-box__title">"Catalog data is not available."</p>
                    <p class="error-box__text">{error}</p>
                    <button class="button button--primary" on:click=move |_| ctx.load_catalog()>
                        {icon("refresh")}
                        "Retry"
                    </button>
                </div>
            }
            .into_any(),
            CatalogState::Ready(records) => match route {
                Route::CollectionList => view! { <CollectionList records=records /> }.into_any(),
                Route::CollectionDetail { collection } => view! {
                    <CollectionDetail records=records collection=collection />
                }
                .into_any(),
                Route::DesignVariants {
                    collection,
                    design_id,
                } => view! {
                    <DesignVariants records=records collection=collection design_id=design_id />
                }
                .into_any(),
                Route::NotFound => view! { <NotFound /> }.into_any(),
            },
        }
    }
}
