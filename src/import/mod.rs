//! Category-aware bulk import pipeline
//!
//! Raw spreadsheet rows flow through [`normalize_rows`] into JSON records,
//! which [`submit_records`] pushes to the API one at a time. The purge side
//! mirrors it: fetch one page, delete one record at a time.

mod bulk;
mod normalize;

pub use bulk::{BulkOutcome, PurgeOutcome, purge_category, submit_records};
pub use normalize::{Record, normalize_rows};
