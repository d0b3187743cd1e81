//! Sequential bulk submission and deletion
//!
//! Both directions share the same contract: records are processed one at a
//! time (each request awaited before the next starts), a per-record failure
//! is counted and logged but never aborts the batch, and only the aggregate
//! outcome reaches the user. There is no retry, no dedup and no mid-batch
//! cancellation.

use anyhow::Result;
use log::{info, warn};
use serde_json::Value;

use crate::api::{FundingApi, PAGE_LIMIT};
use crate::schema::Category;

use super::Record;

/// Aggregate result of one bulk run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkOutcome {
    /// Aggregate import report. A batch with at least one success is a
    /// success; the failure count is appended when non-zero.
    pub fn import_report(&self) -> String {
        if self.succeeded == 0 {
            "Failed to upload records. Check the log for per-record errors.".to_string()
        } else if self.failed > 0 {
            format!(
                "Successfully uploaded {} records ({} failed)",
                self.succeeded, self.failed
            )
        } else {
            format!("Successfully uploaded {} records", self.succeeded)
        }
    }
}

/// Result of a purge run. An empty category is reported distinctly from a
/// purge where every delete failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// The list endpoint returned no records; nothing was deleted.
    Empty,
    Completed(BulkOutcome),
}

impl PurgeOutcome {
    pub fn report(&self) -> String {
        match self {
            PurgeOutcome::Empty => "No records found to delete".to_string(),
            PurgeOutcome::Completed(outcome) if outcome.succeeded == 0 => {
                format!("Failed to delete all {} records", outcome.failed)
            }
            PurgeOutcome::Completed(outcome) if outcome.failed > 0 => format!(
                "Successfully deleted {} records ({} failed)",
                outcome.succeeded, outcome.failed
            ),
            PurgeOutcome::Completed(outcome) => {
                format!("Successfully deleted {} records", outcome.succeeded)
            }
        }
    }
}

/// POST each record to the category's create endpoint, one at a time.
///
/// Submission is not idempotent: re-running a successful batch creates
/// duplicate records, since the server does not dedup by name.
pub async fn submit_records<A: FundingApi + Sync>(
    api: &A,
    category: Category,
    records: &[Record],
) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();

    for record in records {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("(unnamed)");

        match api.create_record(category, record).await {
            Ok(()) => outcome.succeeded += 1,
            Err(err) => {
                warn!("Failed to create '{}' in {}: {:#}", name, category, err);
                outcome.failed += 1;
            }
        }
    }

    info!(
        "Import into {} finished: {} succeeded, {} failed",
        category, outcome.succeeded, outcome.failed
    );
    outcome
}

/// Delete every record of a category.
///
/// Fetches a single page of up to [`PAGE_LIMIT`] records, then issues
/// one DELETE per id. Categories larger than the page limit need repeated
/// runs. The caller is responsible for confirming this destructive action
/// before invoking it.
pub async fn purge_category<A: FundingApi + Sync>(
    api: &A,
    category: Category,
) -> Result<PurgeOutcome> {
    let records = api.list_records(category, PAGE_LIMIT).await?;
    if records.is_empty() {
        return Ok(PurgeOutcome::Empty);
    }

    info!("Deleting {} records from {}", records.len(), category);
    let mut outcome = BulkOutcome::default();

    for record in &records {
        match api.delete_record(category, &record.id).await {
            Ok(()) => outcome.succeeded += 1,
            Err(err) => {
                warn!(
                    "Failed to delete '{}' ({}) from {}: {:#}",
                    record.name(),
                    record.id,
                    category,
                    err
                );
                outcome.failed += 1;
            }
        }
    }

    Ok(PurgeOutcome::Completed(outcome))
}
