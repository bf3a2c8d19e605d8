//! Order history route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use charkha_core::{CartItem, OrderId, OrderStatus, PROGRESS_STEPS, Price};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Order list entry.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub total: Price,
    pub status: OrderStatus,
    pub item_count: usize,
}

/// Order detail with the fulfillment progress projection.
///
/// `progress_index` is the zero-based position of `status` along
/// `progress_steps`; a cancelled order has no position and is flagged
/// separately instead.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<CartItem>,
    pub progress_steps: Vec<OrderStatus>,
    pub progress_index: Option<usize>,
    pub cancelled: bool,
}

/// Order history, most recent first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<OrderSummary>>> {
    let orders = state.orders().list().await?;
    let summaries = orders
        .into_iter()
        .map(|order| OrderSummary {
            id: order.id,
            date: order.date,
            total: order.total,
            status: order.status,
            item_count: order.items.len(),
        })
        .collect();
    Ok(Json(summaries))
}

/// Order detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>> {
    let id = OrderId::new(id);
    let order = state
        .orders()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(OrderDetail {
        id: order.id,
        date: order.date,
        total: order.total,
        status: order.status,
        items: order.items,
        progress_steps: PROGRESS_STEPS.to_vec(),
        progress_index: order.status.progress_index(),
        cancelled: order.status == OrderStatus::Cancelled,
    }))
}
