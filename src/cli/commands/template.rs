//! Template generation handler

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::*;

use crate::excel::{template_filename, write_template_excel};
use crate::schema::Category;

pub fn run(category: Category, output: Option<&Path>) -> Result<()> {
    let path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(template_filename(category)),
    };

    write_template_excel(category, &path)?;

    println!(
        "Template for {} written to {}",
        category.label().cyan(),
        path.display().to_string().bright_green()
    );
    Ok(())
}
