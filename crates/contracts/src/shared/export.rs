//! Tabular model handed to the spreadsheet writer

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Text(String),
    Number(f64),
    Empty,
}

impl From<&str> for ExportCell {
    fn from(s: &str) -> Self {
        ExportCell::Text(s.to_string())
    }
}

impl From<String> for ExportCell {
    fn from(s: String) -> Self {
        ExportCell::Text(s)
    }
}

impl From<f64> for ExportCell {
    fn from(v: f64) -> Self {
        ExportCell::Number(v)
    }
}

impl From<i64> for ExportCell {
    fn from(v: i64) -> Self {
        ExportCell::Number(v as f64)
    }
}

/// One exported row: column name to value, in column order
pub type ExportRecord = Vec<(&'static str, ExportCell)>;

/// Types that can be exported to a spreadsheet
pub trait ExcelExportable {
    fn to_export_record(&self) -> ExportRecord;
}

/// Headers plus rows, ready to be written to a worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ExportCell>>,
}

impl ExportTable {
    /// Build a table from mapping-shaped records.
    ///
    /// Headers are the record keys in insertion order; keys that only appear
    /// in later records are appended, and rows lacking a key get an empty
    /// cell.
    pub fn from_records(sheet_name: &str, records: &[ExportRecord]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in records {
            for (key, _) in record {
                if !headers.iter().any(|h| h == key) {
                    headers.push((*key).to_string());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|h| {
                        record
                            .iter()
                            .find(|(key, _)| *key == h.as_str())
                            .map(|(_, cell)| cell.clone())
                            .unwrap_or(ExportCell::Empty)
                    })
                    .collect()
            })
            .collect();

        Self {
            sheet_name: sheet_name.to_string(),
            headers,
            rows,
        }
    }

    pub fn from_items<T: ExcelExportable>(sheet_name: &str, items: &[T]) -> Self {
        let records: Vec<ExportRecord> = items.iter().map(|i| i.to_export_record()).collect();
        Self::from_records(sheet_name, &records)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_follow_insertion_order() {
        let records: Vec<ExportRecord> = vec![
            vec![("Product", "Wig".into()), ("Qty", 2i64.into())],
            vec![("Product", "Bundle".into()), ("Qty", 1i64.into()), ("Note", "late".into())],
        ];
        let table = ExportTable::from_records("Sheet1", &records);
        assert_eq!(table.headers, vec!["Product", "Qty", "Note"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], ExportCell::Empty);
        assert_eq!(table.rows[1][2], ExportCell::Text("late".into()));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = ExportTable::from_records("Sheet1", &[]);
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }
}
