use super::errors::IngestionError;
use super::source_table::{CellValue, SourceTable};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Читает первый лист книги Excel.
///
/// The first row is the header row; header cells are trimmed and blank ones
/// dropped. Empty cells become `CellValue::Empty`, which the normalizer turns
/// into empty strings.
pub fn read_workbook(path: &Path) -> Result<SourceTable, IngestionError> {
    if !path.exists() {
        return Err(IngestionError::SourceNotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestionError::EmptySource)?;

    tracing::info!("Reading sheet '{}'", sheet_name);
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| cell_to_value(cell).as_text()).collect(),
        None => return Err(IngestionError::EmptySource),
    };

    let raw_rows: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    Ok(SourceTable::from_rows(headers, raw_rows))
}

fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_read_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet().set_name("Master").unwrap();
        sheet.write_string(0, 0, " Vendor ").unwrap();
        sheet.write_string(0, 1, "UPC").unwrap();
        sheet.write_string(0, 2, "Retail Price").unwrap();
        sheet.write_string(1, 0, "Loloi").unwrap();
        sheet.write_number(1, 1, 885555000001.0).unwrap();
        sheet.write_number(1, 2, 499.5).unwrap();
        // строка 2 пустая
        sheet.write_string(3, 0, "Surya").unwrap();
        let notes = workbook.add_worksheet().set_name("Notes").unwrap();
        notes.write_string(0, 0, "Comment").unwrap();
        workbook.save(&path).unwrap();

        let table = read_workbook(&path).unwrap();
        assert_eq!(table.headers, vec!["Vendor", "UPC", "Retail Price"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0]["UPC"], CellValue::Number(885555000001.0));
        assert_eq!(table.rows[0]["Retail Price"], CellValue::Number(499.5));
        assert_eq!(table.rows[1]["Vendor"], CellValue::Text("Surya".to_string()));
        assert!(table.rows[1].get("UPC").map_or(true, CellValue::is_blank));
    }

    #[test]
    fn test_cell_to_value() {
        assert_eq!(cell_to_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_to_value(&Data::String("  ".to_string())), CellValue::Empty);
        assert_eq!(
            cell_to_value(&Data::String(" Ivory ".to_string())),
            CellValue::Text("Ivory".to_string())
        );
        assert_eq!(cell_to_value(&Data::Int(42)), CellValue::Number(42.0));
        assert_eq!(cell_to_value(&Data::Float(499.5)), CellValue::Number(499.5));
    }

    #[test]
    fn test_missing_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_workbook(&dir.path().join("catalog.xlsx")).unwrap_err();
        assert!(matches!(err, IngestionError::SourceNotFound(_)));
    }
}
