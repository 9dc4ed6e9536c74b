//! Order submission client
//!
//! Hands the assembled [`OrderPayload`] to the restaurant's order
//! endpoint and returns the created order's identifiers. Transport
//! failures, endpoint rejections and malformed responses are all
//! surfaced to the caller, never swallowed; the caller decides whether
//! to retry and clears the cart only after success.

use crate::config::CartConfig;
use reqwest::{Client, StatusCode};
use shared::models::{OrderPayload, OrderReceipt};
use thiserror::Error;

/// Submission error type
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint rejected the order
    #[error("Order rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// 2xx response that does not parse as an order receipt
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// HTTP client for the order submission endpoint
#[derive(Debug, Clone)]
pub struct OrderSubmitter {
    client: Client,
    base_url: String,
}

impl OrderSubmitter {
    /// Create a submitter from configuration
    pub fn new(config: &CartConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.order_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit an assembled order and return its identifiers
    pub async fn submit(&self, payload: &OrderPayload) -> SubmitResult<OrderReceipt> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%status, %message, "Order submission rejected");
            return Err(SubmitError::Rejected { status, message });
        }

        let receipt: OrderReceipt = response
            .json()
            .await
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            order_id = %receipt.order_id,
            order_number = %receipt.order_number,
            "Order submitted"
        );
        Ok(receipt)
    }
}
