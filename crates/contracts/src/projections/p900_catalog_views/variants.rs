use crate::domain::a001_rug::{resolve_order_id, CanonicalField, ResolvedOrderId, RugRecord};
use crate::shared::list_utils::{filter_by_search_term, SortState, SortValue, Sortable};
use crate::shared::money::coerce_retail;

/// Фильтр по точному совпадению поля.
///
/// For the price field `value` goes through monetary coercion first, so
/// `"$499.50"` matches a record priced at `499.5`.
pub fn filter_by_exact_field(records: &[RugRecord], field: CanonicalField, value: &str) -> Vec<RugRecord> {
    if field.is_monetary() {
        let wanted = coerce_retail(value);
        return records
            .iter()
            .filter(|r| r.retail_price == wanted)
            .cloned()
            .collect();
    }
    records
        .iter()
        .filter(|r| r.text(field) == Some(value))
        .cloned()
        .collect()
}

/// Записи одного дизайна внутри коллекции
pub fn design_variants(records: &[RugRecord], collection_name: &str, design_id: &str) -> Vec<RugRecord> {
    let collection = filter_by_exact_field(records, CanonicalField::CollectionName, collection_name);
    filter_by_exact_field(&collection, CanonicalField::DesignId, design_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSortKey {
    Size,
    DesignId,
    PrimaryColor,
    RetailPrice,
    Upc,
}

impl Sortable for RugRecord {
    type Key = VariantSortKey;

    fn sort_value(&self, key: VariantSortKey) -> SortValue<'_> {
        match key {
            VariantSortKey::Size => SortValue::Text(&self.size),
            VariantSortKey::DesignId => SortValue::Text(&self.design_id),
            VariantSortKey::PrimaryColor => SortValue::Text(&self.primary_color),
            VariantSortKey::RetailPrice => SortValue::Number(self.retail_price),
            VariantSortKey::Upc => SortValue::Text(&self.upc),
        }
    }
}

/// Строка таблицы вариантов вместе с разрешенным Order ID
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRow {
    pub record: RugRecord,
    pub order_id: ResolvedOrderId,
}

impl From<RugRecord> for VariantRow {
    fn from(record: RugRecord) -> Self {
        let order_id = resolve_order_id(&record);
        Self { record, order_id }
    }
}

/// Параметры таблицы вариантов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantListQuery {
    /// Narrows the rows to one primary color
    pub selected_color: Option<String>,
    /// Matched against the size
    pub search_term: String,
    pub sort: SortState<VariantSortKey>,
}

impl VariantListQuery {
    pub fn apply(&self, records: &[RugRecord]) -> Vec<VariantRow> {
        let narrowed = match &self.selected_color {
            Some(color) => filter_by_exact_field(records, CanonicalField::PrimaryColor, color),
            None => records.to_vec(),
        };
        let searched = filter_by_search_term(&narrowed, &self.search_term, |r| r.size.as_str());
        self.sort.apply(&searched).into_iter().map(VariantRow::from).collect()
    }
}
