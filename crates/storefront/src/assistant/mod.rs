//! AI assistant capability: chat and product recommendations.
//!
//! The model provider sits behind the [`Assistant`] trait so the routes
//! depend on a capability, not a vendor. Failure policy is fixed at the call
//! site: chat falls back to [`CHAT_FALLBACK`], recommendations fall back to
//! the featured-products list. Neither endpoint ever surfaces a model error
//! to the client.

pub mod claude;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use charkha_core::{ProductId, UserId};

pub use claude::ClaudeAssistant;

/// Fixed apology served when the chat backend is unavailable.
pub const CHAT_FALLBACK: &str =
    "I'm sorry, but I'm having trouble connecting right now. Please try again later.";

/// Errors from the assistant backend.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Model API returned an error.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the API.
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse the model response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key configured; every call fails and fallbacks apply.
    #[error("assistant not configured")]
    NotConfigured,
}

/// Input for a personalized recommendation request.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub user_id: UserId,
    /// Product IDs the user recently viewed.
    pub browsing_history: Vec<ProductId>,
    /// Product IDs the user previously bought.
    pub past_purchases: Vec<ProductId>,
}

/// Capability for AI-backed chat and recommendations.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Recommend products for a user.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` on any backend failure; callers substitute
    /// the featured-products fallback.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ProductId>, AssistantError>;

    /// Answer a free-text support query.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` on any backend failure; callers substitute
    /// [`CHAT_FALLBACK`].
    async fn chat(&self, query: &str) -> Result<String, AssistantError>;
}

/// Assistant used when no API key is configured.
///
/// Every call errors, which routes the chat and recommendation endpoints
/// straight to their static fallbacks.
pub struct UnconfiguredAssistant;

#[async_trait]
impl Assistant for UnconfiguredAssistant {
    async fn recommend(
        &self,
        _request: &RecommendationRequest,
    ) -> Result<Vec<ProductId>, AssistantError> {
        Err(AssistantError::NotConfigured)
    }

    async fn chat(&self, _query: &str) -> Result<String, AssistantError> {
        Err(AssistantError::NotConfigured)
    }
}
