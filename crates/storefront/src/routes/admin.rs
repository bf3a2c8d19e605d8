//! Admin catalog management handlers.
//!
//! Plain CRUD over the product store. The path ID is authoritative on
//! update: a body whose `id` disagrees with the path is rejected rather
//! than silently renaming the product.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use charkha_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Full catalog, unfiltered.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.products().list().await?))
}

/// Create a product.
#[instrument(skip(state, product))]
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>)> {
    validate(&product)?;
    let product = state.products().create(product).await?;
    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product. The path ID must match the body ID.
#[instrument(skip(state, product))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    if product.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            product.id
        )));
    }

    validate(&product)?;
    let product = state.products().update(product).await?;
    tracing::info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    state.products().delete(&id).await?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn validate(product: &Product) -> Result<()> {
    if product.id.as_str().trim().is_empty() {
        return Err(AppError::BadRequest("product id must not be empty".to_string()));
    }
    if product.name.trim().is_empty() {
        return Err(AppError::BadRequest("product name must not be empty".to_string()));
    }
    if product.price.rupees() <= 0 {
        return Err(AppError::BadRequest("product price must be positive".to_string()));
    }
    Ok(())
}
