//! Cart route handlers.
//!
//! The cart itself is a pure value ([`CartState`]); these handlers load it
//! from the session, apply one operation, and store the new state back.
//! Every operation is total: invalid quantities and unknown line items are
//! no-ops, so the handlers never fail on cart input - only on session I/O
//! or an unknown product at add time.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use charkha_core::{CartItem, CartState, CartTotals, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Session key the serialized cart lives under.
pub(crate) const CART_SESSION_KEY: &str = "cart";

/// Cart response body.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub item_count: u32,
}

impl CartView {
    fn of(cart: &CartState) -> Self {
        Self {
            items: cart.items().to_vec(),
            totals: cart.totals(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart count badge response body.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

/// Load the cart from the session, defaulting to an empty cart.
pub(crate) async fn load_cart(session: &Session) -> Result<CartState> {
    Ok(session
        .get::<CartState>(CART_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

/// Store the cart into the session.
pub(crate) async fn store_cart(session: &Session, cart: &CartState) -> Result<()> {
    session.insert(CART_SESSION_KEY, cart).await?;
    Ok(())
}

/// Show the cart with derived totals.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::of(&cart)))
}

/// Add an item to the cart.
///
/// Looks the product up so the line item snapshots the current name and
/// price. Unknown products are a 404; a missing quantity defaults to 1.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(request.product_id);
    let product = state
        .products()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let cart = load_cart(&session).await?;
    let cart = cart.add_item(&product, request.quantity.unwrap_or(1));
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::of(&cart)))
}

/// Replace a line item's quantity.
///
/// A quantity below 1 leaves the cart unchanged; removal is its own action.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    let cart = cart.update_quantity(&ProductId::new(request.product_id), request.quantity);
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::of(&cart)))
}

/// Remove a line item.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    let cart = cart.remove_item(&ProductId::new(request.product_id));
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::of(&cart)))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?.clear();
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::of(&cart)))
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}
