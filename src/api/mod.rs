//! Aarly admin REST API client

mod client;

pub use client::{AarlyClient, FundingApi, FundingRecord, PAGE_LIMIT};
