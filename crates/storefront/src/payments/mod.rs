//! Payment integrations.
//!
//! Two flows, both server-side only up to the handoff:
//! - [`razorpay`] - creates a gateway order; the browser then opens the
//!   hosted payment UI with the returned order ID
//! - [`upi`] - builds a `upi://pay` deep link the browser navigates to
//!
//! Gateway calls are attempted exactly once; failures surface as a
//! user-visible error at the call site, never a retry loop.

pub mod razorpay;
pub mod upi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use charkha_core::Price;

pub use razorpay::RazorpayClient;

/// Errors from the payment gateway.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned an error response.
    #[error("gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },

    /// Failed to parse the gateway response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// A gateway order, ready for the hosted payment UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Gateway-assigned order ID.
    pub id: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Amount in minor currency units (paise).
    pub amount: i64,
}

/// Capability for creating payment orders with the gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a gateway order for the given amount.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` if the request fails or the gateway rejects
    /// the order. Callers translate this into a user-visible message.
    async fn create_order(&self, amount: Price) -> Result<PaymentOrder, PaymentError>;
}
