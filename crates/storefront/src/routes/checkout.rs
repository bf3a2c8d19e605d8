//! Checkout route handlers.
//!
//! Two payment handoffs (gateway order, UPI deep link) plus order placement.
//! Placement snapshots the session cart into an order and clears the cart -
//! in that sequence, so a failed store never loses the shopper's cart.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use charkha_core::{CartState, Order, OrderId, OrderStatus, Price};

use crate::error::{AppError, Result};
use crate::payments::{PaymentOrder, upi};
use crate::routes::cart::{load_cart, store_cart};
use crate::state::AppState;

/// Note attached to UPI payments.
const UPI_PAYMENT_NOTE: &str = "Charkha Bazaar order";

/// Payment order request body. Amount is in whole rupees.
#[derive(Debug, Deserialize)]
pub struct PaymentOrderRequest {
    pub amount: i64,
}

/// UPI link query parameters. Amount is in whole rupees.
#[derive(Debug, Deserialize)]
pub struct UpiLinkQuery {
    pub amount: i64,
}

/// UPI link response body.
#[derive(Debug, Serialize)]
pub struct UpiLinkView {
    pub link: String,
    pub reference: String,
}

/// Placed order response body.
#[derive(Debug, Serialize)]
pub struct PlacedOrderView {
    pub order_id: OrderId,
    pub total: Price,
    pub status: OrderStatus,
}

/// Create a payment gateway order for the given amount.
///
/// The client opens the hosted payment UI with the returned order ID. A
/// gateway failure becomes a user-visible error, attempted exactly once.
#[instrument(skip(state))]
pub async fn payment_order(
    State(state): State<AppState>,
    Json(request): Json<PaymentOrderRequest>,
) -> Result<Json<PaymentOrder>> {
    if request.amount <= 0 {
        return Err(AppError::BadRequest("amount must be positive".to_string()));
    }

    let order = state
        .gateway()
        .create_order(Price::new(request.amount))
        .await?;
    Ok(Json(order))
}

/// Build a UPI deep link for the given amount.
#[instrument(skip(state))]
pub async fn upi_link(
    State(state): State<AppState>,
    Query(query): Query<UpiLinkQuery>,
) -> Result<Json<UpiLinkView>> {
    if query.amount <= 0 {
        return Err(AppError::BadRequest("amount must be positive".to_string()));
    }

    let reference = upi::generate_reference();
    let link = upi::payment_link(
        &state.config().upi,
        Price::new(query.amount),
        UPI_PAYMENT_NOTE,
        &reference,
    );

    Ok(Json(UpiLinkView { link, reference }))
}

/// Snapshot the session cart into a new order.
///
/// The cart is cleared only after the order is stored.
#[instrument(skip(state, session))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<PlacedOrderView>> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_string()));
    }

    let id = OrderId::new(format!("order_{}", Uuid::new_v4().simple()));
    let order = Order::from_cart(id, &cart, Utc::now());
    let order = state.orders().create(order).await?;

    store_cart(&session, &CartState::default()).await?;
    tracing::info!(order_id = %order.id, total = order.total.rupees(), "order placed");

    Ok(Json(PlacedOrderView {
        order_id: order.id,
        total: order.total,
        status: order.status,
    }))
}
