//! Производные представления каталога.
//!
//! Three views derived from the flat record list: collections, designs/colors
//! of one collection, and the variants of one design. Every function is a pure
//! function of the records and the query parameters.

pub mod attributes;
pub mod collections;
pub mod variants;

pub use attributes::{
    colors_by_size_count, default_color, group_by_design_or_color, AttributeSortKey, AttributeSummary, DesignListQuery,
    GroupMode,
};
pub use collections::{group_by_collection, CollectionListQuery, CollectionSortKey, CollectionSummary};
pub use variants::{
    design_variants, filter_by_exact_field, VariantListQuery, VariantRow, VariantSortKey,
};
