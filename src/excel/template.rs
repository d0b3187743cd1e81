//! Generate downloadable import templates

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::schema::Category;

/// Default filename for a category template, e.g.
/// "Angel Investors_Template.xlsx".
pub fn template_filename(category: Category) -> String {
    format!("{}_Template.xlsx", category.label())
}

/// Write a one-data-row template for a category.
///
/// Row 0 holds the schema field names in canonical column order, row 1 a
/// sample value per field. Imports discard row 0 and bind cells by
/// position, so the header order here is the parsing contract.
pub fn write_template_excel(category: Category, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(category.label())?;

    for (col, field) in category.schema().iter().enumerate() {
        worksheet.write_string(0, col as u16, field.name)?;
        worksheet.write_string(1, col as u16, field.example)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save template: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};

    #[test]
    fn test_template_filename_uses_category_label() {
        assert_eq!(
            template_filename(Category::VentureCapital),
            "Venture Capital_Template.xlsx"
        );
        assert_eq!(
            template_filename(Category::GovtGrants),
            "Govt Grants_Template.xlsx"
        );
    }

    #[test]
    fn test_template_column_order_matches_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vc_template.xlsx");
        write_template_excel(Category::VentureCapital, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let sheet_name = workbook.sheet_names().first().unwrap().clone();
        let range = workbook.worksheet_range(&sheet_name).unwrap();
        let rows: Vec<_> = range.rows().collect();

        let header: Vec<String> = rows[0]
            .iter()
            .map(|cell| match cell {
                Data::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        let expected: Vec<String> = Category::VentureCapital
            .schema()
            .iter()
            .map(|f| f.name.to_string())
            .collect();
        assert_eq!(header, expected);

        // One example row, aligned with the header.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), rows[0].len());
    }
}
