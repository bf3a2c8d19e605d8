//! In-memory store implementations.
//!
//! Vec-behind-a-lock stand-ins for the hosted document database. Good enough
//! for a single process: every operation takes the lock, applies one change,
//! and releases it before any await point.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use charkha_core::{Order, OrderId, OrderStatus, Product, ProductId};

use super::{OrderStore, ProductStore, StoreError};

/// In-memory product catalog.
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    /// Create a store holding the given catalog.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = self
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(products.clone())
    }

    async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let products = self
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn create(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::Backend(format!(
                "product {} already exists",
                product.id
            )));
        }
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(StoreError::NotFound(format!("product {}", product.id))),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(StoreError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}

/// In-memory order history.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        let mut orders = orders.clone();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(orders)
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);
        Ok(orders.iter().find(|o| o.id == *id).cloned())
    }

    async fn create(&self, order: Order) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        orders.push(order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        match orders.iter_mut().find(|o| o.id == *id) {
            Some(order) => {
                order.status = status;
                Ok(order.clone())
            }
            None => Err(StoreError::NotFound(format!("order {id}"))),
        }
    }
}
