use crate::projections::p900_catalog_views::api;
use crate::routes::Route;
use contracts::domain::a001_rug::RugRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use web_sys::window;

/// Состояние загрузки `data.json`
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(Arc<Vec<RugRecord>>),
    /// Fetch or parse failure; the page offers a retry
    Failed(String),
}

/// Глобальное состояние приложения: текущий маршрут и загруженный каталог
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub catalog: RwSignal<CatalogState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(current_route()),
            catalog: RwSignal::new(CatalogState::Loading),
        }
    }

    /// Follows browser back/forward buttons
    pub fn init_router_integration(&self) {
        let route = self.route;
        // слушатель живет все время работы приложения
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            route.set(current_route());
        });
    }

    /// Переход на маршрут с записью в history
    pub fn navigate(&self, target: Route) {
        let path = target.to_path();
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
                    log::warn!("pushState failed for {}: {:?}", path, e);
                }
            }
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.route.set(target);
    }

    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        catalog.set(CatalogState::Loading);
        spawn_local(async move {
            match api::fetch_catalog().await {
                Ok(records) => {
                    log::info!("Catalog loaded: {} records", records.len());
                    catalog.set(CatalogState::Ready(Arc::new(records)));
                }
                Err(e) => {
                    log::error!("Catalog load failed: {}", e);
                    catalog.set(CatalogState::Failed(e));
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_route() -> Route {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse(&path)
}
