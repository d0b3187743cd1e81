//! HTTP client for the `/funding/admin` endpoints
//!
//! The route segments are the kebab-case category names; the server
//! responds with `{ "success": bool, ... }` envelopes on every endpoint.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Category;

/// Maximum number of records fetched from the list endpoint. It is read
/// once with this limit, not paginated, so list-side operations (list,
/// export, purge) see at most this many records per run.
pub const PAGE_LIMIT: usize = 1000;

/// One record as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRecord {
    #[serde(rename = "_id")]
    pub id: String,
    /// Remaining fields, keyed by schema field name.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl FundingRecord {
    pub fn name(&self) -> &str {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("(unnamed)")
    }
}

/// The admin API surface used by bulk operations. Implemented by
/// [`AarlyClient`] for real traffic and by fakes in tests.
#[async_trait]
pub trait FundingApi {
    /// Create one record. An `Err` covers both transport failures and
    /// `success: false` envelopes.
    async fn create_record(&self, category: Category, record: &Map<String, Value>) -> Result<()>;

    /// List up to `limit` records of a category.
    async fn list_records(&self, category: Category, limit: usize) -> Result<Vec<FundingRecord>>;

    /// Delete one record by id.
    async fn delete_record(&self, category: Category, id: &str) -> Result<()>;
}

/// Response envelope for create/delete endpoints.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<FundingRecord>,
}

#[derive(Debug, Clone)]
pub struct AarlyClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl AarlyClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn category_url(&self, category: Category) -> String {
        format!("{}/funding/admin/{}", self.base_url, category)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check_envelope(success: bool, message: Option<String>, action: &str) -> Result<()> {
        if success {
            Ok(())
        } else {
            Err(anyhow!(
                "{} rejected by server: {}",
                action,
                message.unwrap_or_else(|| "no message".to_string())
            ))
        }
    }
}

#[async_trait]
impl FundingApi for AarlyClient {
    async fn create_record(&self, category: Category, record: &Map<String, Value>) -> Result<()> {
        let url = self.category_url(category);
        debug!("POST {}", url);

        let response = self
            .with_auth(self.http.post(&url))
            .json(record)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .with_context(|| format!("Create request to {} failed", url))?;

        let body: ApiResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid response from {}", url))?;

        Self::check_envelope(body.success, body.message, "Create")
    }

    async fn list_records(&self, category: Category, limit: usize) -> Result<Vec<FundingRecord>> {
        let url = format!("{}?limit={}", self.category_url(category), limit);
        debug!("GET {}", url);

        let response = self
            .with_auth(self.http.get(&url))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .with_context(|| format!("List request to {} failed", url))?;

        let body: ListResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid response from {}", url))?;

        Self::check_envelope(body.success, body.message, "List")?;
        Ok(body.data)
    }

    async fn delete_record(&self, category: Category, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.category_url(category), id);
        debug!("DELETE {}", url);

        let response = self
            .with_auth(self.http.delete(&url))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .with_context(|| format!("Delete request to {} failed", url))?;

        let body: ApiResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid response from {}", url))?;

        Self::check_envelope(body.success, body.message, "Delete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_url_uses_route_segment() {
        let client = AarlyClient::new("https://api.aarly.co/api/", None);
        assert_eq!(
            client.category_url(Category::AngelInvestors),
            "https://api.aarly.co/api/funding/admin/angel-investors"
        );
    }

    #[test]
    fn test_funding_record_deserializes_mongo_shape() {
        let record: FundingRecord = serde_json::from_value(json!({
            "_id": "64fa3c2e9d1b4a0012345678",
            "name": "Peak Ventures",
            "city": "Bengaluru",
            "sectors": ["Fintech", "Healthtech"],
        }))
        .unwrap();

        assert_eq!(record.id, "64fa3c2e9d1b4a0012345678");
        assert_eq!(record.name(), "Peak Ventures");
        assert_eq!(record.fields["city"], json!("Bengaluru"));
    }

    #[test]
    fn test_funding_record_without_name() {
        let record: FundingRecord = serde_json::from_value(json!({
            "_id": "64fa3c2e9d1b4a0012345678",
        }))
        .unwrap();
        assert_eq!(record.name(), "(unnamed)");
    }

    #[test]
    fn test_check_envelope_surfaces_server_message() {
        let err = AarlyClient::check_envelope(false, Some("duplicate name".to_string()), "Create")
            .unwrap_err();
        assert!(err.to_string().contains("duplicate name"));

        assert!(AarlyClient::check_envelope(true, None, "Create").is_ok());
    }
}
