//! Spreadsheet export: workbook bytes via `rust_xlsxwriter`, download via Blob + anchor

use contracts::shared::export::{ExcelExportable, ExportCell, ExportTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { rows: usize },
    /// Nothing to export; no file was produced
    Empty,
}

/// Write headers and rows of `table` into an in-memory workbook
pub fn build_workbook(table: &ExportTable) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&table.sheet_name)?;

    let bold = Format::new().set_bold();
    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &bold)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let row_idx = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            match cell {
                ExportCell::Text(s) => {
                    worksheet.write_string(row_idx, c as u16, s)?;
                }
                ExportCell::Number(n) => {
                    worksheet.write_number(row_idx, c as u16, *n)?;
                }
                ExportCell::Empty => {}
            }
        }
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer()
}

/// Export `items` as `filename`. An empty collection is a logged no-op.
pub fn export_to_excel<T: ExcelExportable>(
    items: &[T],
    filename: &str,
    sheet_name: &str,
) -> Result<ExportOutcome, String> {
    let table = ExportTable::from_items(sheet_name, items);
    if table.is_empty() {
        log::warn!("Nothing to export for {}", filename);
        return Ok(ExportOutcome::Empty);
    }

    let bytes = build_workbook(&table).map_err(|e| format!("Failed to build workbook: {}", e))?;
    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, filename)?;

    log::info!("Exported {} rows to {}", table.rows.len(), filename);
    Ok(ExportOutcome::Written {
        rows: table.rows.len(),
    })
}

fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let data = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&data.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::export::ExportRecord;

    #[test]
    fn test_build_workbook_produces_zip() {
        let records: Vec<ExportRecord> = vec![
            vec![("Product", "Wig".into()), ("Qty", 2i64.into())],
            vec![("Product", "Bundle".into())],
        ];
        let table = ExportTable::from_records("Sales Report", &records);
        let bytes = build_workbook(&table).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_sheet_name_is_validated() {
        let table = ExportTable::from_records("bad/name", &[]);
        assert!(build_workbook(&table).is_err());
    }

    #[test]
    fn test_empty_export_is_a_no_op() {
        let rows: Vec<contracts::projections::p900_sales_report::dto::SalesReportRow> = Vec::new();
        assert_eq!(
            export_to_excel(&rows, "sales_report.xlsx", "Sales Report"),
            Ok(ExportOutcome::Empty)
        );
    }
}
