use super::{csv_reader, errors::IngestionError, excel_reader, normalizer, source_table::SourceTable, writer};
use crate::shared::format::format_megabytes;
use contracts::usecases::u501_import_catalog::{
    ImportSummary, SchemaKind, SchemaVariant, USECASE_INDEX, USECASE_NAME,
};
use std::path::{Path, PathBuf};

/// Запрос на конвертацию мастер-листа
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub source: PathBuf,
    /// Explicit source kind; guessed from the extension when `None`
    pub kind: Option<SchemaKind>,
    pub output: PathBuf,
}

/// Executor для UseCase импорта каталога ковров
pub struct ImportExecutor;

impl ImportExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Read, validate, normalize, write. Any error leaves the previous output untouched.
    pub fn run(&self, request: &ImportRequest) -> Result<ImportSummary, IngestionError> {
        let kind = resolve_kind(request)?;
        let schema = SchemaVariant::for_kind(kind);

        tracing::info!(
            "{}_{}: converting {} source {}",
            USECASE_INDEX,
            USECASE_NAME,
            kind.display_name(),
            request.source.display()
        );

        let table = read_source(&request.source, kind)?;
        let catalog = normalizer::normalize(&table, schema)?;
        let output_bytes = writer::write_catalog(&request.output, &catalog.records, schema)?;

        tracing::info!(
            "Wrote {} records to {} ({} MB)",
            catalog.records.len(),
            request.output.display(),
            format_megabytes(output_bytes)
        );

        Ok(ImportSummary {
            schema: kind,
            row_count: catalog.report.row_count,
            collection_count: catalog.report.collection_count,
            missing_optional: catalog.report.missing_optional,
            identity_fill: catalog.report.identity_fill,
            output_path: request.output.display().to_string(),
            output_bytes,
        })
    }
}

impl Default for ImportExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_kind(request: &ImportRequest) -> Result<SchemaKind, IngestionError> {
    if let Some(kind) = request.kind {
        return Ok(kind);
    }
    request
        .source
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SchemaKind::from_extension)
        .ok_or_else(|| IngestionError::UnsupportedSource(request.source.clone()))
}

fn read_source(path: &Path, kind: SchemaKind) -> Result<SourceTable, IngestionError> {
    match kind {
        SchemaKind::DelimitedText => csv_reader::read_csv_file(path),
        SchemaKind::Spreadsheet => excel_reader::read_workbook(path),
    }
}
