//! Purge handler
//!
//! Deleting every record of a category is irreversible, so the prompt
//! defaults to "no" and must be answered explicitly unless --yes is given.

use anyhow::Result;
use colored::*;
use dialoguer::Confirm;

use crate::api::AarlyClient;
use crate::import::{PurgeOutcome, purge_category};
use crate::schema::Category;

pub async fn run(client: &AarlyClient, category: Category, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete ALL {} records? This cannot be undone",
                category.label()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = purge_category(client, category).await?;

    let report = outcome.report();
    match outcome {
        PurgeOutcome::Empty => println!("{}", report.yellow()),
        PurgeOutcome::Completed(counts) if counts.succeeded == 0 => {
            println!("{}", report.red())
        }
        PurgeOutcome::Completed(_) => println!("{}", report.green()),
    }

    Ok(())
}
