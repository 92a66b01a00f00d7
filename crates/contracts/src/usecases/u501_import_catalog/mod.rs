pub mod schema;

pub use schema::{ColumnSpec, OutputRecord, SchemaKind, SchemaVariant, DELIMITED_TEXT, SPREADSHEET};

use serde::Serialize;

pub const USECASE_INDEX: &str = "u501";
pub const USECASE_NAME: &str = "import_catalog";

/// Доля строк с заполненным полем
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillRate {
    pub filled: usize,
    pub total: usize,
}

impl FillRate {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.filled as f64 * 100.0 / self.total as f64
        }
    }
}

impl std::fmt::Display for FillRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} rows have values ({:.1}%)",
            self.filled,
            self.total,
            self.percent()
        )
    }
}

/// Итог импорта каталога
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub schema: SchemaKind,
    pub row_count: usize,
    pub collection_count: usize,
    pub missing_optional: Vec<String>,
    /// Fill rate of the optional identity column, when the column exists
    pub identity_fill: Option<FillRate>,
    pub output_path: String,
    pub output_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rate_display() {
        let rate = FillRate {
            filled: 1,
            total: 3,
        };
        assert_eq!(rate.to_string(), "1 of 3 rows have values (33.3%)");
        assert_eq!(FillRate { filled: 0, total: 0 }.percent(), 0.0);
    }
}
