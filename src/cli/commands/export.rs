//! Export handler

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::*;

use crate::api::{AarlyClient, FundingApi, PAGE_LIMIT};
use crate::excel::write_records_excel;
use crate::schema::Category;

pub async fn run(client: &AarlyClient, category: Category, output: Option<&Path>) -> Result<()> {
    let records = client.list_records(category, PAGE_LIMIT).await?;
    if records.is_empty() {
        println!("No {} records to export", category.label());
        return Ok(());
    }

    let path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("{}.xlsx", category.label())),
    };

    write_records_excel(category, &records, &path)?;

    println!(
        "Exported {} {} records to {}",
        records.len().to_string().bold(),
        category.label().cyan(),
        path.display().to_string().bright_green()
    );
    Ok(())
}
