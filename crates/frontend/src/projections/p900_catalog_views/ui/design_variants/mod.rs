use crate::layout::global_context::AppGlobalContext;
use crate::routes::Route;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::display::{name_or_unknown, price_or_na, text_or_na};
use crate::shared::icons::icon;
use crate::shared::list_utils::SortableHeader;
use contracts::domain::a001_rug::{OrderIdRule, ResolvedOrderId, RugRecord};
use contracts::projections::p900_catalog_views::{design_variants, VariantListQuery, VariantSortKey};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

const COPIED_RESET_MS: u32 = 2000;

/// Варианты одного дизайна с Order ID
#[component]
#[allow(non_snake_case)]
pub fn DesignVariants(records: Arc<Vec<RugRecord>>, collection: String, design_id: String) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let variants = design_variants(&records, &collection, &design_id);

    let back_target = Route::CollectionDetail {
        collection: collection.clone(),
    };
    let back_href = back_target.to_path();
    let back_link = view! {
        <a
            href=back_href
            class="back-button"
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(back_target.clone());
            }
        >
            {icon("chevron-left")}
            {format!("Back to {}", name_or_unknown(&collection))}
        </a>
    };

    if variants.is_empty() {
        return view! {
            <div class="detail-container">
                {back_link}
                <div class="error">"Design not found."</div>
            </div>
        }
        .into_any();
    }

    let vendor = name_or_unknown(&variants[0].vendor);
    let (query, set_query) = signal(VariantListQuery::default());
    let rows = Memo::new(move |_| query.with(|q| q.apply(&variants)));

    let sort = Signal::derive(move || query.with(|q| q.sort));
    let on_sort = Callback::new(move |key: VariantSortKey| {
        set_query.update(|q| q.sort = q.sort.toggle(key));
    });

    view! {
        <div class="detail-container">
            {back_link}

            <div class="detail-header">
                <h1>{design_id}</h1>
                <h2>{format!("{} · {}", name_or_unknown(&collection), vendor)}</h2>
            </div>

            <table class="table__data table--striped detail-table">
                <thead class="table__head">
                    <tr>
                        <SortableHeader label="Size" key=VariantSortKey::Size sort=sort on_sort=on_sort />
                        <SortableHeader label="Color" key=VariantSortKey::PrimaryColor sort=sort on_sort=on_sort />
                        <SortableHeader label="UPC" key=VariantSortKey::Upc sort=sort on_sort=on_sort />
                        <SortableHeader label="Retail Price" key=VariantSortKey::RetailPrice sort=sort on_sort=on_sort />
                        <th class="table__header-cell">"Order ID"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{text_or_na(&row.record.size)}</td>
                                <td class="table__cell">{name_or_unknown(&row.record.primary_color)}</td>
                                <td class="table__cell">{text_or_na(&row.record.upc)}</td>
                                <td class="table__cell table__cell--number">{price_or_na(row.record.retail_price)}</td>
                                <OrderIdCell order_id=row.order_id />
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

/// Ячейка Order ID с кнопкой копирования
#[component]
fn OrderIdCell(order_id: ResolvedOrderId) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let display = order_id.display_value().to_string();
    let is_present = order_id.is_present;
    // вендорский номер вместо собственного SKU магазина
    let is_fallback = order_id.is_fallback(&OrderIdRule::ANY_SCHEMA);
    let fallback_title = if is_fallback { "Vendor part number" } else { "" };
    let value = order_id.value;

    let on_copy = move |_| {
        if !is_present {
            return;
        }
        copy_to_clipboard_with_callback(&value, move || {
            set_copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_RESET_MS).await;
                // строка могла исчезнуть после пересортировки
                set_copied.try_set(false);
            });
        });
    };

    view! {
        <td class="table__cell order-id-cell">
            <span
                class="order-id"
                class:order-id--missing={!is_present}
                class:order-id--fallback=is_fallback
                title=fallback_title
            >
                {display}
            </span>
            <button
                class="button button--ghost copy-button"
                disabled={!is_present}
                title="Copy Order ID"
                on:click=on_copy
            >
                {icon("copy")}
                {move || if copied.get() { "Copied!" } else { "Copy" }}
            </button>
        </td>
    }
}
