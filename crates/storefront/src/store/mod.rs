//! Storage capabilities for products and orders.
//!
//! The hosted document database sits behind these traits; the storefront
//! core never sees a concrete persistence mechanism. The in-memory
//! implementations in [`memory`] stand in for the real backend and are
//! seeded from [`seed`] at startup.

pub mod memory;
pub mod query;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use charkha_core::{Order, OrderId, OrderStatus, Product, ProductId};

pub use memory::{InMemoryOrderStore, InMemoryProductStore};
pub use query::{CatalogQuery, SortOrder};

/// Errors from a backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend rejected or failed the operation.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Read/write access to the product catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, in catalog order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product, or `None` if the ID is unknown.
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a new product.
    async fn create(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace an existing product; `NotFound` if the ID is unknown.
    async fn update(&self, product: Product) -> Result<Product, StoreError>;

    /// Delete a product; `NotFound` if the ID is unknown.
    async fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}

/// Read/write access to placed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders, most recent first.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// A single order, or `None` if the ID is unknown.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;

    /// Persist a newly placed order.
    async fn create(&self, order: Order) -> Result<Order, StoreError>;

    /// Advance an order's fulfillment status; `NotFound` if the ID is unknown.
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, StoreError>;
}
