//! Read raw rows from an uploaded spreadsheet

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

/// Reject files that are not `.xlsx` or `.xls` before touching their
/// contents. The check is by extension, matching the admin upload contract.
pub fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xls" => Ok(()),
        _ => bail!(
            "Unsupported file type '{}': only .xlsx and .xls files can be imported",
            path.display()
        ),
    }
}

/// Read the data rows of the first sheet of a spreadsheet.
///
/// Row 0 is always discarded as a header, whatever it actually contains.
/// Cells are returned positionally; column position, not header text, is
/// the binding contract with the category schema.
pub fn read_raw_rows(path: &Path) -> Result<Vec<Vec<Data>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to read spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Spreadsheet has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    Ok(range.rows().skip(1).map(|row| row.to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_check_extension_accepts_excel_files() {
        assert!(check_extension(Path::new("investors.xlsx")).is_ok());
        assert!(check_extension(Path::new("investors.xls")).is_ok());
        assert!(check_extension(Path::new("INVESTORS.XLSX")).is_ok());
    }

    #[test]
    fn test_check_extension_rejects_other_files() {
        assert!(check_extension(Path::new("investors.csv")).is_err());
        assert!(check_extension(Path::new("investors.pdf")).is_err());
        assert!(check_extension(Path::new("investors")).is_err());
    }

    #[test]
    fn test_read_raw_rows_discards_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "name").unwrap();
        sheet.write_string(0, 1, "ticketSize").unwrap();
        sheet.write_string(1, 0, "Rajesh").unwrap();
        sheet.write_number(1, 1, 500000.0).unwrap();
        sheet.write_string(2, 0, "Anita").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_raw_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Data::String("Rajesh".to_string()));
        assert_eq!(rows[0][1], Data::Float(500000.0));
    }

    #[test]
    fn test_read_raw_rows_header_only_sheet_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header_only.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "name").unwrap();
        workbook.save(&path).unwrap();

        let rows = read_raw_rows(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_raw_rows_unreadable_file_is_one_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.xlsx");
        std::fs::write(&path, b"not a spreadsheet").unwrap();

        let err = read_raw_rows(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read spreadsheet"));
    }
}
