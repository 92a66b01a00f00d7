use contracts::domain::a001_rug::number_as_text;
use std::collections::HashMap;

/// Значение ячейки исходной таблицы
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Text form used for text fields; numbers lose a trailing `.0`
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => number_as_text(*n),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }
}

/// Строка таблицы: имя колонки -> значение. Absent keys are missing cells.
pub type SourceRow = HashMap<String, CellValue>;

/// Таблица, прочитанная из CSV или Excel
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    /// Headers present in the file, in file order
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl SourceTable {
    /// Builds a table from a header row and positional rows. Short rows leave
    /// the trailing cells absent; blank header cells drop their column.
    pub fn from_rows(headers: Vec<String>, raw_rows: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let rows = raw_rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_blank()))
            .map(|row| {
                headers
                    .iter()
                    .zip(row)
                    .filter(|(header, _)| !header.is_empty())
                    .map(|(header, cell)| (header.clone(), cell))
                    .collect::<SourceRow>()
            })
            .collect();

        Self {
            headers: headers.into_iter().filter(|h| !h.is_empty()).collect(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_from_rows_maps_by_header() {
        let table = SourceTable::from_rows(
            vec![" Vendor ".to_string(), "".to_string(), "UPC".to_string()],
            vec![
                vec![text("Loloi"), text("ignored"), CellValue::Number(885555000001.0)],
                vec![text("Surya")],
                vec![CellValue::Empty, text("  "), CellValue::Empty],
            ],
        );
        assert_eq!(table.headers, vec!["Vendor".to_string(), "UPC".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0]["UPC"].as_text(), "885555000001");
        assert!(!table.rows[0].contains_key(""));
        assert!(!table.rows[1].contains_key("UPC"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(CellValue::Number(12.5).as_text(), "12.5");
        assert_eq!(CellValue::Empty.as_text(), "");
        assert!(text(" ").is_blank());
    }
}
