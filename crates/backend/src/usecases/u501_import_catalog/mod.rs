pub mod csv_reader;
pub mod errors;
pub mod excel_reader;
pub mod executor;
pub mod normalizer;
pub mod source_table;
pub mod writer;

pub use errors::IngestionError;
pub use executor::{ImportExecutor, ImportRequest};
