//! Assistant route handlers: support chat and recommendations.
//!
//! Both endpoints absorb model failures. Chat answers with a fixed apology,
//! recommendations answer with the featured-products list; neither returns
//! an error status for a backend problem.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use charkha_core::{Product, ProductId, UserId};

use crate::assistant::{CHAT_FALLBACK, RecommendationRequest};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Chat response body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Recommendations query parameters.
///
/// History lists are comma-separated product IDs.
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub user_id: String,
    pub browsing_history: Option<String>,
    pub past_purchases: Option<String>,
}

/// Recommendations response body.
///
/// `product_ids` is the recommendation itself; `products` carries the
/// resolved catalog entries so clients can render without a second fetch.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub product_ids: Vec<ProductId>,
    pub products: Vec<Product>,
    /// True when the list is the featured-products fallback rather than a
    /// personalized result.
    pub fallback: bool,
}

fn split_ids(raw: Option<&str>) -> Vec<ProductId> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ProductId::new)
            .collect()
    })
    .unwrap_or_default()
}

/// Customer support chat.
#[instrument(skip(state, request))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if request.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }

    let response = match state.assistant().chat(&request.query).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "chat backend unavailable, serving fallback");
            CHAT_FALLBACK.to_string()
        }
    };

    Ok(Json(ChatResponse { response }))
}

/// Personalized product recommendations.
///
/// Model output is cached per user for a few minutes. IDs the model invents
/// are dropped; if nothing usable remains the featured list is served.
#[instrument(skip(state))]
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>> {
    if query.user_id.trim().is_empty() {
        return Err(AppError::BadRequest("user_id must not be empty".to_string()));
    }

    let catalog = state.products().list().await?;

    if let Some(ids) = state.recommendation_cache().get(&query.user_id).await {
        let products = resolve(&catalog, &ids);
        if !products.is_empty() {
            return Ok(Json(personalized(products)));
        }
    }

    let request = RecommendationRequest {
        user_id: UserId::new(query.user_id.clone()),
        browsing_history: split_ids(query.browsing_history.as_deref()),
        past_purchases: split_ids(query.past_purchases.as_deref()),
    };

    match state.assistant().recommend(&request).await {
        Ok(ids) => {
            let products = resolve(&catalog, &ids);
            if products.is_empty() {
                tracing::warn!(user_id = %query.user_id, "model returned no known products");
                Ok(Json(featured(catalog)))
            } else {
                state
                    .recommendation_cache()
                    .insert(query.user_id, ids)
                    .await;
                Ok(Json(personalized(products)))
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "recommendation backend unavailable, serving featured");
            Ok(Json(featured(catalog)))
        }
    }
}

/// Resolve recommended IDs against the catalog, keeping the model's order.
fn resolve(catalog: &[Product], ids: &[ProductId]) -> Vec<Product> {
    ids.iter()
        .filter_map(|id| catalog.iter().find(|product| product.id == *id))
        .cloned()
        .collect()
}

fn personalized(products: Vec<Product>) -> RecommendationsResponse {
    RecommendationsResponse {
        product_ids: products.iter().map(|p| p.id.clone()).collect(),
        products,
        fallback: false,
    }
}

fn featured(catalog: Vec<Product>) -> RecommendationsResponse {
    let products: Vec<Product> = catalog.into_iter().filter(|p| p.featured).collect();
    RecommendationsResponse {
        product_ids: products.iter().map(|p| p.id.clone()).collect(),
        products,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charkha_core::Price;

    fn product(id: &str, featured: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Price::new(100),
            category: "Test".to_string(),
            image_id: id.to_string(),
            rating: 4.0,
            review_count: 0,
            featured,
            images: None,
            sizes: None,
            tags: None,
        }
    }

    #[test]
    fn test_split_ids_handles_whitespace_and_empties() {
        let ids = split_ids(Some("p1, p2 ,,p3"));
        assert_eq!(
            ids,
            vec![
                ProductId::new("p1"),
                ProductId::new("p2"),
                ProductId::new("p3")
            ]
        );
        assert!(split_ids(None).is_empty());
        assert!(split_ids(Some("")).is_empty());
    }

    #[test]
    fn test_resolve_drops_unknown_ids_and_keeps_order() {
        let catalog = vec![product("p1", false), product("p2", false)];
        let ids = vec![
            ProductId::new("p2"),
            ProductId::new("ghost"),
            ProductId::new("p1"),
        ];

        let resolved = resolve(&catalog, &ids);
        let names: Vec<&str> = resolved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["p2", "p1"]);
    }

    #[test]
    fn test_featured_fallback_selects_featured_products() {
        let catalog = vec![product("p1", true), product("p2", false), product("p3", true)];
        let response = featured(catalog);

        assert!(response.fallback);
        assert_eq!(response.products.len(), 2);
        assert!(response.products.iter().all(|p| p.featured));
        assert_eq!(
            response.product_ids,
            vec![ProductId::new("p1"), ProductId::new("p3")]
        );
    }

    #[test]
    fn test_personalized_response_carries_ids_and_products() {
        let response = personalized(vec![product("p2", false), product("p1", false)]);

        assert!(!response.fallback);
        assert_eq!(
            response.product_ids,
            vec![ProductId::new("p2"), ProductId::new("p1")]
        );
        assert_eq!(response.products.len(), 2);
    }
}
