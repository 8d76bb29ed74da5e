//! MongoDB-backed document store.
//!
//! Speaks the Atlas Data API over HTTPS; a single insert action does not
//! need the wire-protocol driver.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;
use crate::types::FullTextRecord;

/// Collection the full texts land in.
const COLLECTION: &str = "blog_texts";

/// Connection settings for the Data API.
pub struct MongoConfig {
    /// Data API base, e.g. `https://data.mongodb-api.com/app/<app>/endpoint/data/v1`
    pub endpoint: String,

    /// Data API key
    pub api_key: SecretString,

    /// Cluster name, e.g. `Cluster0`
    pub data_source: String,

    /// Database holding the collection
    pub database: String,
}

/// Document store backed by the MongoDB Atlas Data API.
pub struct MongoStore {
    client: reqwest::Client,
    config: MongoConfig,
}

/// Data API `insertOne` request body.
#[derive(Serialize)]
struct InsertOneRequest<'a> {
    #[serde(rename = "dataSource")]
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    document: serde_json::Value,
}

impl MongoStore {
    /// Create a new store for the given Data API settings.
    pub fn new(config: MongoConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_full_text(&self, record: &FullTextRecord) -> StoreResult<()> {
        // Dates must be extended JSON for the Data API to store a real
        // BSON date rather than a string.
        let document = json!({
            "url": record.url,
            "fullText": record.full_text,
            "created_at": { "$date": record.created_at.to_rfc3339() },
        });

        let request = InsertOneRequest {
            data_source: &self.config.data_source,
            database: &self.config.database,
            collection: COLLECTION,
            document,
        };

        let url = format!(
            "{}/action/insertOne",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!(collection = COLLECTION, url = %record.url, "inserting full-text document");

        let response = self
            .client
            .post(&url)
            .header("api-key", self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Data API request failed");
                StoreError::Backend(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend(
                format!("Data API error {status}: {body}").into(),
            ));
        }

        Ok(())
    }
}
