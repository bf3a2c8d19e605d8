//! Orders: immutable snapshots of a cart at checkout time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartItem, CartState};
use crate::types::{OrderId, OrderStatus, Price};

/// An order placed at checkout.
///
/// Everything except `status` is frozen at creation; status advances through
/// the fulfillment lifecycle via an external process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<CartItem>,
}

impl Order {
    /// Snapshot the given cart into a new `Processing` order.
    ///
    /// The total is the cart's full total including shipping; the line items
    /// are copied as-is, quantities and price snapshots included.
    #[must_use]
    pub fn from_cart(id: OrderId, cart: &CartState, placed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: placed_at,
            total: cart.totals().total,
            status: OrderStatus::Processing,
            items: cart.items().to_vec(),
        }
    }
}
