//! Charkha Core - shared domain types and cart logic.
//!
//! This crate holds the storefront's logic core:
//! - [`cart`] - The cart store: an immutable sequence of line items with
//!   total (never-failing) add/update/remove/clear operations
//! - [`pricing`] - Subtotal/shipping/total derivation from a cart
//! - [`order`] - Order snapshots and the fulfillment progress projection
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses
//! - [`product`] - Immutable catalog reference data
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no async. Persistence and transport live in the `storefront` crate behind
//! capability traits; everything here is deterministic given its inputs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod pricing;
pub mod product;
pub mod types;

pub use cart::{CartItem, CartState};
pub use order::Order;
pub use pricing::{CartTotals, FLAT_SHIPPING};
pub use product::Product;
pub use types::*;
