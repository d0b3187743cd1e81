//! Write existing category records back out to Excel

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::Value;

use crate::api::FundingRecord;
use crate::schema::{Category, LIST_DELIMITER};

/// Write records to an `.xlsx` file in schema column order.
///
/// The output round-trips through `import`: list fields are re-packed with
/// the `&` delimiter and the header row matches the category template.
pub fn write_records_excel(
    category: Category,
    records: &[FundingRecord],
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(category.label())?;

    let schema = category.schema();
    for (col, field) in schema.iter().enumerate() {
        worksheet.write_string(0, col as u16, field.name)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col_idx, field) in schema.iter().enumerate() {
            let col = col_idx as u16;
            if let Some(value) = record.fields.get(field.name) {
                write_value(worksheet, row, col, value)?;
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save export: {}", path.display()))?;

    Ok(())
}

fn write_value(ws: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<()> {
    match value {
        Value::Null => { /* Leave cell empty */ }
        Value::String(s) => {
            ws.write_string(row, col, s)?;
        }
        Value::Number(n) => {
            ws.write_number(row, col, n.as_f64().unwrap_or(0.0))?;
        }
        Value::Bool(b) => {
            ws.write_string(row, col, b.to_string())?;
        }
        Value::Array(parts) => {
            let joined = parts
                .iter()
                .map(|p| match p {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(&LIST_DELIMITER.to_string());
            ws.write_string(row, col, joined)?;
        }
        Value::Object(_) => {
            ws.write_string(row, col, value.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use serde_json::json;

    fn record(fields: Value) -> FundingRecord {
        FundingRecord {
            id: "64fa3c2e9d1b4a0012345678".to_string(),
            fields: fields.as_object().unwrap().clone(),
        }
    }

    #[test]
    fn test_export_packs_lists_with_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("angels.xlsx");

        let records = vec![record(json!({
            "name": "Rajesh Sharma",
            "city": "Mumbai",
            "country": "India",
            "ticketSize": 500000,
            "contact": "rajesh@angelmail.com",
            "investmentCategories": ["Fintech", "SaaS"],
        }))];

        write_records_excel(Category::AngelInvestors, &records, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let sheet_name = workbook.sheet_names().first().unwrap().clone();
        let range = workbook.worksheet_range(&sheet_name).unwrap();
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Data::String("Rajesh Sharma".to_string()));
        assert_eq!(rows[1][3], Data::Float(500000.0));

        let list_col = Category::AngelInvestors
            .schema()
            .iter()
            .position(|f| f.name == "investmentCategories")
            .unwrap();
        assert_eq!(rows[1][list_col], Data::String("Fintech&SaaS".to_string()));
    }
}
