//! Claude-backed assistant.
//!
//! Single-turn prompt templates over the Anthropic Messages API: one for
//! customer-support chat, one for personalized recommendations. The
//! recommendation prompt asks for a JSON object, which is extracted from the
//! text block of the response.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use charkha_core::ProductId;

use super::types::{ApiErrorResponse, ChatRequest, ChatResponse, Message};
use super::{Assistant, AssistantError, RecommendationRequest};
use crate::config::ClaudeConfig;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 1024;

const CHAT_SYSTEM_PROMPT: &str = "You are a customer support chatbot for an e-commerce store. \
Your goal is to answer user queries about products, orders, and account information. \
If the user asks about a specific product, provide details such as its name, price, and availability. \
If the user asks about an order, provide its status and tracking information. \
If you don't know the answer to a question, respond politely that you do not have the information.";

const RECOMMEND_SYSTEM_PROMPT: &str = "You are an expert recommendation system for an e-commerce \
platform. Based on the user's browsing history and past purchases, identify products the user \
might be interested in. Respond with only a JSON object of the form \
{\"productIds\": [\"id1\", \"id2\"]} and nothing else.";

/// Claude API client implementing the [`Assistant`] capability.
#[derive(Clone)]
pub struct ClaudeAssistant {
    inner: Arc<ClaudeAssistantInner>,
}

struct ClaudeAssistantInner {
    client: reqwest::Client,
    model: String,
}

impl ClaudeAssistant {
    /// Create a new Claude assistant.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &ClaudeConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ClaudeAssistantInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Run one prompt and return the text of the response.
    #[instrument(skip(self, system, prompt), fields(model = %self.inner.model))]
    async fn complete(&self, system: &str, prompt: String) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![Message::user(prompt)],
            system: Some(system.to_string()),
        };

        let response = self
            .inner
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AssistantError::Parse(format!("Failed to parse response: {e}")))?;

        chat.text()
            .map(str::to_owned)
            .ok_or_else(|| AssistantError::Parse("response contained no text block".to_string()))
    }
}

#[async_trait]
impl Assistant for ClaudeAssistant {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<ProductId>, AssistantError> {
        let text = self
            .complete(RECOMMEND_SYSTEM_PROMPT, recommendation_prompt(request))
            .await?;
        parse_product_ids(&text)
    }

    async fn chat(&self, query: &str) -> Result<String, AssistantError> {
        self.complete(CHAT_SYSTEM_PROMPT, format!("User query: {query}"))
            .await
    }
}

/// Handle an error status code from the API.
async fn handle_error_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> AssistantError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return AssistantError::RateLimited(retry_after);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return AssistantError::Unauthorized("Invalid API key".to_string());
    }

    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                AssistantError::Api {
                    error_type: api_error.error.error_type,
                    message: api_error.error.message,
                }
            } else {
                AssistantError::Api {
                    error_type: "unknown".to_string(),
                    message: body,
                }
            }
        }
        Err(e) => AssistantError::Http(e),
    }
}

/// Render the recommendation prompt for a user.
fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let mut prompt = format!("User ID: {}", request.user_id);
    if !request.browsing_history.is_empty() {
        prompt.push_str("\nBrowsing History: ");
        prompt.push_str(&join_ids(&request.browsing_history));
    }
    if !request.past_purchases.is_empty() {
        prompt.push_str("\nPast Purchases: ");
        prompt.push_str(&join_ids(&request.past_purchases));
    }
    prompt
}

fn join_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Recommendation payload the model is instructed to return.
#[derive(Debug, Deserialize)]
struct RecommendationPayload {
    #[serde(rename = "productIds")]
    product_ids: Vec<String>,
}

/// Extract the `{"productIds": [...]}` object from model output.
///
/// Models occasionally wrap the object in prose or a code fence, so this
/// takes the outermost braces rather than requiring the whole string to be
/// JSON.
fn parse_product_ids(text: &str) -> Result<Vec<ProductId>, AssistantError> {
    let start = text
        .find('{')
        .ok_or_else(|| AssistantError::Parse("no JSON object in response".to_string()))?;
    let end = text
        .rfind('}')
        .ok_or_else(|| AssistantError::Parse("no JSON object in response".to_string()))?;
    let json = text
        .get(start..=end)
        .ok_or_else(|| AssistantError::Parse("malformed JSON object bounds".to_string()))?;

    let payload: RecommendationPayload = serde_json::from_str(json)
        .map_err(|e| AssistantError::Parse(format!("Failed to parse recommendations: {e}")))?;

    Ok(payload.product_ids.into_iter().map(ProductId::new).collect())
}
