//! Универсальные утилиты для списков: поиск и сортировка.
//!
//! Everything here returns a new `Vec` and leaves the input alone: summary
//! lists are also read by default-selection logic, which must not see them
//! reordered.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Значение поля для сравнения при сортировке
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    /// Numbers compare numerically, text by code point. Numbers sort before text.
    pub fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    type Key: Copy + PartialEq;

    fn sort_value(&self, key: Self::Key) -> SortValue<'_>;
}

/// Стабильная сортировка по полю; исходный срез не меняется
pub fn sort_by<T: Sortable + Clone>(items: &[T], key: T::Key, direction: SortDirection) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| direction.apply(a.sort_value(key).compare(&b.sort_value(key))));
    sorted
}

/// Состояние сортировки списка: поле и направление.
///
/// Clicking the same column twice flips the direction, clicking another
/// column starts over in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Asc,
        }
    }
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn by(key: K) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Asc,
        }
    }

    pub fn toggle(self, key: K) -> Self {
        if self.key == Some(key) {
            Self {
                key: Some(key),
                direction: self.direction.reversed(),
            }
        } else {
            Self::by(key)
        }
    }

    pub fn is_sorted_by(&self, key: K) -> bool {
        self.key == Some(key)
    }

    /// Unsorted state keeps the input order
    pub fn apply<T>(&self, items: &[T]) -> Vec<T>
    where
        T: Sortable<Key = K> + Clone,
    {
        match self.key {
            Some(key) => sort_by(items, key, self.direction),
            None => items.to_vec(),
        }
    }
}

/// Фильтрует список по подстроке (без учета регистра).
/// An empty term keeps every item.
pub fn filter_by_search_term<T, F>(items: &[T], term: &str, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| key(item).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
