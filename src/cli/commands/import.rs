//! Bulk import handler

use std::path::Path;

use anyhow::{Result, bail};
use colored::*;
use log::info;

use crate::api::AarlyClient;
use crate::excel;
use crate::import::{normalize_rows, submit_records};
use crate::schema::Category;

pub async fn run(client: &AarlyClient, category: Category, file: &Path) -> Result<()> {
    excel::check_extension(file)?;

    let rows = excel::read_raw_rows(file)?;
    if rows.is_empty() {
        bail!("Spreadsheet has no data rows (row 1 is treated as a header)");
    }

    let records = normalize_rows(category, &rows);
    if records.is_empty() {
        bail!(
            "No valid rows found: every row is missing at least one required field for {}",
            category.label()
        );
    }

    if records.len() < rows.len() {
        info!(
            "Accepted {} of {} rows; the rest were missing required fields",
            records.len(),
            rows.len()
        );
    }

    println!(
        "Uploading {} records to {}...",
        records.len().to_string().bold(),
        category.label().cyan()
    );

    let outcome = submit_records(client, category, &records).await;

    let report = outcome.import_report();
    if outcome.succeeded > 0 {
        println!("{}", report.green());
    } else {
        println!("{}", report.red());
    }

    Ok(())
}
