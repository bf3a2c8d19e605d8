//! Razorpay Orders API client.
//!
//! Creates server-side gateway orders with payment capture enabled. Amounts
//! are converted to paise before hitting the wire; each order carries a
//! freshly generated receipt ID.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use rand::distr::Alphanumeric;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use charkha_core::Price;

use super::{PaymentError, PaymentGateway, PaymentOrder};
use crate::config::RazorpayConfig;

const RECEIPT_PREFIX: &str = "rcpt_";
const RECEIPT_RANDOM_LEN: usize = 14;

/// Razorpay API client.
#[derive(Clone)]
pub struct RazorpayClient {
    inner: Arc<RazorpayClientInner>,
}

struct RazorpayClientInner {
    client: reqwest::Client,
    key_id: String,
    key_secret: SecretString,
    api_base: String,
}

/// Order creation request body.
#[derive(Debug, Serialize)]
struct CreateOrderRequest {
    /// Amount in paise.
    amount: i64,
    currency: &'static str,
    receipt: String,
    payment_capture: u8,
}

/// Order creation response body (fields we use).
#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    id: String,
    currency: String,
    amount: i64,
}

/// Gateway error response body.
#[derive(Debug, Deserialize)]
struct GatewayErrorResponse {
    error: GatewayError,
}

#[derive(Debug, Deserialize)]
struct GatewayError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

impl RazorpayClient {
    /// Create a new Razorpay client.
    #[must_use]
    pub fn new(config: &RazorpayConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            inner: Arc::new(RazorpayClientInner {
                client,
                key_id: config.key_id.clone(),
                key_secret: config.key_secret.clone(),
                api_base: config.api_base.clone(),
            }),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    #[instrument(skip(self), fields(amount = amount.rupees()))]
    async fn create_order(&self, amount: Price) -> Result<PaymentOrder, PaymentError> {
        let request = CreateOrderRequest {
            amount: amount.paise(),
            currency: "INR",
            receipt: generate_receipt(),
            payment_capture: 1,
        };

        let response = self
            .inner
            .client
            .post(format!("{}/v1/orders", self.inner.api_base))
            .basic_auth(
                &self.inner.key_id,
                Some(self.inner.key_secret.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => serde_json::from_str::<GatewayErrorResponse>(&body).map_or(body, |e| {
                    format!("{}: {}", e.error.code, e.error.description)
                }),
                Err(e) => e.to_string(),
            };
            return Err(PaymentError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let order: CreateOrderResponse = serde_json::from_str(&body)
            .map_err(|e| PaymentError::Parse(format!("Failed to parse order response: {e}")))?;

        Ok(PaymentOrder {
            id: order.id,
            currency: order.currency,
            amount: order.amount,
        })
    }
}

/// Generate a fresh receipt ID for a gateway order.
fn generate_receipt() -> String {
    let random: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RECEIPT_RANDOM_LEN)
        .map(char::from)
        .collect();
    format!("{RECEIPT_PREFIX}{random}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_receipt_shape() {
        let receipt = generate_receipt();
        assert!(receipt.starts_with(RECEIPT_PREFIX));
        assert_eq!(receipt.len(), RECEIPT_PREFIX.len() + RECEIPT_RANDOM_LEN);
        assert!(
            receipt[RECEIPT_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[test]
    fn test_receipts_are_unique_enough() {
        let a = generate_receipt();
        let b = generate_receipt();
        assert_ne!(a, b);
    }

    #[test]
    fn test_create_order_request_serialization() {
        let request = CreateOrderRequest {
            amount: Price::new(300).paise(),
            currency: "INR",
            receipt: "rcpt_test".to_string(),
            payment_capture: 1,
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["amount"], 30_000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["payment_capture"], 1);
    }

    #[test]
    fn test_gateway_error_response_parses() {
        let body = r#"{"error": {"code": "BAD_REQUEST_ERROR", "description": "amount missing"}}"#;
        let parsed: GatewayErrorResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(parsed.error.code, "BAD_REQUEST_ERROR");
        assert_eq!(parsed.error.description, "amount missing");
    }

    #[test]
    fn test_razorpay_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<RazorpayClient>();
        assert_send_sync::<RazorpayClient>();
    }
}
