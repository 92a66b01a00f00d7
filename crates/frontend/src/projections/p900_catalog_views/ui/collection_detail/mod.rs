use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::display::{name_or_unknown, price_or_na, text_or_na};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortableHeader};
use contracts::domain::a001_rug::{CanonicalField, RugRecord};
use contracts::projections::p900_catalog_views::{
    colors_by_size_count, default_color, filter_by_exact_field, group_by_design_or_color, AttributeSortKey,
    DesignListQuery, GroupMode, VariantListQuery, VariantSortKey,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Коллекция: выбор цвета, дизайны выбранного цвета и таблица вариантов
#[component]
#[allow(non_snake_case)]
pub fn CollectionDetail(records: Arc<Vec<RugRecord>>, collection: String) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let members = Arc::new(filter_by_exact_field(
        &records,
        CanonicalField::CollectionName,
        &collection,
    ));

    let back_link = move || {
        view! {
            <a
                href="/"
                class="back-button"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::CollectionList);
                }
            >
                {icon("chevron-left")}
                "Back to Master List"
            </a>
        }
    };

    if members.is_empty() {
        return view! {
            <div class="detail-container">
                {back_link()}
                <div class="error">"Collection not found."</div>
            </div>
        }
        .into_any();
    }

    let vendor = name_or_unknown(&members[0].vendor);
    let colors = group_by_design_or_color(&members, GroupMode::ByColor);
    let initial_color = default_color(&colors).map(|c| c.key.clone());

    let (variant_query, set_variant_query) = signal(VariantListQuery {
        selected_color: initial_color,
        ..Default::default()
    });
    let (design_query, set_design_query) = signal(DesignListQuery::default());

    let designs = {
        let members = members.clone();
        Memo::new(move |_| {
            let narrowed = match variant_query.with(|q| q.selected_color.clone()) {
                Some(color) => filter_by_exact_field(&members, CanonicalField::PrimaryColor, &color),
                None => members.to_vec(),
            };
            let summaries = group_by_design_or_color(&narrowed, GroupMode::ByDesign);
            design_query.with(|q| q.apply(&summaries))
        })
    };

    let variants = {
        let members = members.clone();
        Memo::new(move |_| variant_query.with(|q| q.apply(&members)))
    };

    let design_sort = Signal::derive(move || design_query.with(|q| q.sort));
    let on_design_sort = Callback::new(move |key: AttributeSortKey| {
        set_design_query.update(|q| q.sort = q.sort.toggle(key));
    });
    let variant_sort = Signal::derive(move || variant_query.with(|q| q.sort));
    let on_variant_sort = Callback::new(move |key: VariantSortKey| {
        set_variant_query.update(|q| q.sort = q.sort.toggle(key));
    });

    let color_options = colors_by_size_count(&colors)
        .iter()
        .map(|summary| {
            let label = format!("{} ({} sizes)", name_or_unknown(&summary.key), summary.size_count());
            view! { <option value={summary.key.clone()}>{label}</option> }
        })
        .collect_view();

    view! {
        <div class="detail-container">
            {back_link()}

            <div class="detail-header">
                <h1>{name_or_unknown(&collection)}</h1>
                <h2>{vendor}</h2>
            </div>

            <div class="color-selector-container">
                <label for="color-select">"Select Color:"</label>
                <select
                    id="color-select"
                    class="color-dropdown"
                    prop:value=move || variant_query.with(|q| q.selected_color.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let color = event_target_value(&ev);
                        set_variant_query.update(|q| q.selected_color = Some(color));
                    }
                >
                    {color_options}
                </select>
            </div>

            <section class="detail-section">
                <div class="detail-section__header">
                    <h3>"Designs"</h3>
                    <SearchInput
                        value=Signal::derive(move || design_query.with(|q| q.search_term.clone()))
                        on_change=Callback::new(move |term: String| set_design_query.update(|q| q.search_term = term))
                        placeholder="Search design ID..."
                    />
                </div>
                <table class="table__data table--striped detail-table">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="Design ID" key=AttributeSortKey::Key sort=design_sort on_sort=on_design_sort />
                            <SortableHeader label="# of Rugs" key=AttributeSortKey::Count sort=design_sort on_sort=on_design_sort />
                            <SortableHeader label="# of Sizes" key=AttributeSortKey::SizeCount sort=design_sort on_sort=on_design_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let collection = collection.clone();
                            move || {
                                let collection = collection.clone();
                                designs.get().into_iter().map(move |design| {
                                    let target = Route::DesignVariants {
                                        collection: collection.clone(),
                                        design_id: design.key.clone(),
                                    };
                                    view! {
                                        <tr class="table__row" on:click=move |_| ctx.navigate(target.clone())>
                                            <td class="table__cell">{text_or_na(&design.key)}</td>
                                            <td class="table__cell table__cell--number">{design.count}</td>
                                            <td class="table__cell table__cell--number">{design.size_count()}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }
                    </tbody>
                </table>
                <Show when=move || designs.with(|d| d.is_empty())>
                    <div class="error">"No designs found for the selected color."</div>
                </Show>
            </section>

            <section class="detail-section">
                <h3>"Sizes"</h3>
                <table class="table__data table--striped detail-table">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="Size" key=VariantSortKey::Size sort=variant_sort on_sort=on_variant_sort />
                            <SortableHeader label="Design ID" key=VariantSortKey::DesignId sort=variant_sort on_sort=on_variant_sort />
                            <SortableHeader label="Retail Price" key=VariantSortKey::RetailPrice sort=variant_sort on_sort=on_variant_sort />
                        </tr>
                    </thead>
                    <tbody>
                        {move || variants.get().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{text_or_na(&row.record.size)}</td>
                                    <td class="table__cell">{text_or_na(&row.record.design_id)}</td>
                                    <td class="table__cell table__cell--number">{price_or_na(row.record.retail_price)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || variants.with(|v| v.is_empty())>
                    <div class="error">"No items found for the selected color."</div>
                </Show>
            </section>
        </div>
    }
    .into_any()
}
