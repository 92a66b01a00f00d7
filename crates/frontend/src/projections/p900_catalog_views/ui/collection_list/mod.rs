use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::display::name_or_unknown;
use crate::shared::list_utils::{SearchInput, SortableHeader};
use contracts::domain::a001_rug::RugRecord;
use contracts::projections::p900_catalog_views::{
    group_by_collection, CollectionListQuery, CollectionSortKey,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Главный список коллекций
#[component]
#[allow(non_snake_case)]
pub fn CollectionList(records: Arc<Vec<RugRecord>>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let collections = group_by_collection(&records);
    for collection in &collections {
        let conflicts = collection.vendor_conflicts();
        if !conflicts.is_empty() {
            log::warn!(
                "Collection '{}' has mixed vendors, showing '{}' (also {})",
                collection.collection_name,
                collection.vendor,
                conflicts.join(", ")
            );
        }
    }

    let (query, set_query) = signal(CollectionListQuery::default());
    let visible = Memo::new(move |_| query.with(|q| q.apply(&collections)));

    let sort = Signal::derive(move || query.with(|q| q.sort));
    let on_sort = Callback::new(move |key: CollectionSortKey| {
        set_query.update(|q| q.sort = q.sort.toggle(key));
    });

    view! {
        <div class="page master-list-container">
            <div class="master-list-header">
                <h1>"Homemakers Rug Database"</h1>
                <SearchInput
                    value=Signal::derive(move || query.with(|q| q.search_term.clone()))
                    on_change=Callback::new(move |term: String| set_query.update(|q| q.search_term = term))
                    placeholder="Search collections..."
                />
            </div>

            <table class="table__data table--striped collections-table">
                <thead class="table__head">
                    <tr>
                        <SortableHeader label="Collection Name" key=CollectionSortKey::CollectionName sort=sort on_sort=on_sort />
                        <SortableHeader label="Brand" key=CollectionSortKey::Vendor sort=sort on_sort=on_sort />
                        <SortableHeader label="# of Rugs" key=CollectionSortKey::Count sort=sort on_sort=on_sort />
                    </tr>
                </thead>
                <tbody>
                    {move || visible.get().into_iter().map(|collection| {
                        let target = Route::CollectionDetail {
                            collection: collection.collection_name.clone(),
                        };
                        view! {
                            <tr class="table__row" on:click=move |_| ctx.navigate(target.clone())>
                                <td class="table__cell">{name_or_unknown(&collection.collection_name)}</td>
                                <td class="table__cell">{name_or_unknown(&collection.vendor)}</td>
                                <td class="table__cell table__cell--number">{collection.count}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="error">"No collections found matching your search."</div>
            </Show>
        </div>
    }
}
