use super::errors::IngestionError;
use super::source_table::{CellValue, SourceTable};
use std::path::Path;

/// Читает CSV файл в таблицу
pub fn read_csv_file(path: &Path) -> Result<SourceTable, IngestionError> {
    if !path.exists() {
        return Err(IngestionError::SourceNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_csv_text(&text)
}

/// Parses CSV text with a header row. Cells are trimmed, blank lines skipped,
/// short rows tolerated.
pub fn parse_csv_text(csv_text: &str) -> Result<SourceTable, IngestionError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut raw_rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        raw_rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    tracing::debug!("CSV parsed: {} headers, {} rows", headers.len(), raw_rows.len());

    Ok(SourceTable::from_rows(headers, raw_rows))
}
