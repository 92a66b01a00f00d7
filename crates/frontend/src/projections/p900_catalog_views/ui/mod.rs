pub mod collection_detail;
pub mod collection_list;
pub mod design_variants;

pub use collection_detail::CollectionDetail;
pub use collection_list::CollectionList;
pub use design_variants::DesignVariants;
