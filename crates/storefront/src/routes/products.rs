//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use charkha_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::CatalogQuery;

/// Catalog listing with optional category/search/sort parameters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = state.products().list().await?;
    Ok(Json(query.apply(products)))
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .products()
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
