use log::warn;
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION}};
use serde_json::{json, Value};
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MondayError {
    #[error("Board IDs not configured")]
    BoardsNotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct MondayConfig {
    pub api_key: String,
    pub base_url: String,
    pub work_orders_board_id: Option<String>,
    pub deals_board_id: Option<String>,
}

/// Thin client for the Monday.com GraphQL API. Holds a single reqwest
/// client with the API key preloaded; constructed once at startup and
/// shared across requests.
#[derive(Clone)]
pub struct MondayClient {
    http: HttpClient,
    base_url: String,
    work_orders_board_id: Option<String>,
    deals_board_id: Option<String>,
}

impl MondayClient {
    pub fn new(config: MondayConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| format!("Invalid API key format: {}", e))?
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            base_url: config.base_url,
            work_orders_board_id: config.work_orders_board_id,
            deals_board_id: config.deals_board_id,
        })
    }

    async fn query(&self, query: &str) -> Result<Value, reqwest::Error> {
        self.http
            .post(&self.base_url)
            .json(&json!({ "query": query }))
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }

    /// Fetch one board's items (first 500) with raw column id/text/value
    /// triples. Failures are captured as an `{"error": ...}` envelope so a
    /// broken board never sinks the whole dataset.
    pub async fn board_data(&self, board_id: &str) -> Value {
        let query = format!(
            "{{ boards(ids: {board_id}) {{ name items_page(limit: 500) \
             {{ items {{ id name column_values {{ id text value }} }} }} }} }}"
        );

        match self.query(&query).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Board {} fetch failed: {}", board_id, e);
                json!({ "error": e.to_string() })
            }
        }
    }

    /// List every board on the account (id and name). Operator helper for
    /// discovering which ids to configure; not part of the ask pipeline.
    pub async fn list_boards(&self) -> Result<Value, MondayError> {
        Ok(self.query("{ boards { id name } }").await?)
    }

    /// Fetch both configured boards into the aggregated dataset the prompt
    /// is built from. The two fetches are independent: one board erroring
    /// leaves the other's data intact.
    pub async fn board_dataset(&self) -> Result<Value, MondayError> {
        let (work_orders_id, deals_id) = match (&self.work_orders_board_id, &self.deals_board_id) {
            (Some(w), Some(d)) => (w.clone(), d.clone()),
            _ => return Err(MondayError::BoardsNotConfigured),
        };

        let (work_orders, deals) = tokio::join!(
            self.board_data(&work_orders_id),
            self.board_data(&deals_id)
        );

        Ok(json!({
            "work_orders": work_orders,
            "deals": deals,
        }))
    }
}
