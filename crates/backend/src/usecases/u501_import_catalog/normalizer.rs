use super::errors::IngestionError;
use super::source_table::{CellValue, SourceRow, SourceTable};
use contracts::domain::a001_rug::{CanonicalField, RugRecord};
use contracts::projections::p900_catalog_views::group_by_collection;
use contracts::shared::money::sanitize_price;
use contracts::usecases::u501_import_catalog::{FillRate, SchemaVariant};

/// Отчет нормализации
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionReport {
    pub row_count: usize,
    pub missing_optional: Vec<String>,
    /// `None` when the identity column is absent from the source
    pub identity_fill: Option<FillRate>,
    pub collection_count: usize,
}

/// Нормализованный каталог, готовый к записи
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    pub records: Vec<RugRecord>,
    pub report: IngestionReport,
}

/// Проверяет колонки и переводит строки таблицы в записи каталога.
///
/// Row order is preserved. Nothing here touches the filesystem; a returned
/// error means no output must be produced.
pub fn normalize(table: &SourceTable, schema: &SchemaVariant) -> Result<NormalizedCatalog, IngestionError> {
    if table.rows.is_empty() {
        return Err(IngestionError::EmptySource);
    }
    tracing::info!("Found {} rows", table.row_count());

    let missing = schema.missing_required(&table.headers);
    if !missing.is_empty() {
        return Err(IngestionError::MissingRequiredColumns {
            missing,
            found: table.headers.clone(),
        });
    }

    let missing_optional = schema.missing_optional(&table.headers);
    for column in &missing_optional {
        tracing::info!("Optional column '{}' not found, values will be empty", column);
    }

    let records: Vec<RugRecord> = table.rows.iter().map(|row| map_row(row, schema)).collect();

    let identity_fill = schema
        .identity_column()
        .filter(|column| !missing_optional.iter().any(|m| m == column.source))
        .map(|column| {
            let rate = FillRate {
                filled: records.iter().filter(|r| r.has_value(column.field)).count(),
                total: records.len(),
            };
            tracing::info!("{}: {}", column.source, rate);
            rate
        });

    let collections = group_by_collection(&records);
    for collection in &collections {
        let conflicts = collection.vendor_conflicts();
        if !conflicts.is_empty() {
            tracing::warn!(
                "Collection '{}' has mixed vendors: keeping '{}', also seen {}",
                collection.collection_name,
                collection.vendor,
                conflicts.join(", ")
            );
        }
    }

    let report = IngestionReport {
        row_count: records.len(),
        missing_optional,
        identity_fill,
        collection_count: collections.len(),
    };

    Ok(NormalizedCatalog { records, report })
}

fn map_row(row: &SourceRow, schema: &SchemaVariant) -> RugRecord {
    let mut record = RugRecord::default();
    for column in schema.columns {
        match row.get(column.source) {
            Some(CellValue::Number(n)) if column.field == CanonicalField::RetailPrice => {
                record.retail_price = sanitize_price(*n);
            }
            Some(cell) => record.set_text(column.field, cell.as_text()),
            None => record.set_text(column.field, String::new()),
        }
    }
    record
}
