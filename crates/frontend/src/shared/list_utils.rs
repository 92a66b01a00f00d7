/// Утилиты для списков: поиск с debounce и сортируемые заголовки таблиц
use contracts::shared::list_utils::{SortDirection, SortState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator<K: Copy + PartialEq>(state: &SortState<K>, key: K) -> &'static str {
    if state.is_sorted_by(key) {
        match state.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    // only the latest keystroke may publish its value
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                class:search-input--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-clear" title="Clear" on:click=clear_filter>
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Заголовок колонки с переключением сортировки по клику
#[component]
pub fn SortableHeader<K>(
    label: &'static str,
    key: K,
    #[prop(into)] sort: Signal<SortState<K>>,
    #[prop(into)] on_sort: Callback<K>,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            class:table__header-cell--sorted=move || sort.with(|s| s.is_sorted_by(key))
            on:click=move |_| on_sort.run(key)
        >
            {label}
            <span class="sort-indicator">{move || sort.with(|s| sort_indicator(s, key))}</span>
        </th>
    }
}
