//! The cart store.
//!
//! A cart is an ordered sequence of line items. Every operation is total
//! (invalid input is a no-op, never an error) and yields a new [`CartState`]
//! value; the previous state is left untouched. Persisting a cart - to a
//! session, local storage, or a backend - is an external concern layered on
//! top of these pure operations.
//!
//! # Invariants
//!
//! - Item IDs are unique within the sequence (one entry per product).
//! - Every quantity is >= 1. An update that would drive a quantity below 1
//!   is rejected outright rather than clamped or treated as removal;
//!   [`CartState::remove_item`] is the only removal path.
//! - Insertion order is display order.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::{Price, ProductId};

/// A line item: a product reference plus quantity and price snapshot.
///
/// `price` and `name` are copied from the product at add time, so catalog
/// edits after the fact do not change what the shopper saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Same value as the product's ID.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub image_id: String,
}

/// The ordered set of line items a shopper has selected but not purchased.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line item is appended with the product's current name
    /// and price snapshotted. A quantity of zero is a no-op.
    #[must_use]
    pub fn add_item(&self, product: &Product, quantity: u32) -> Self {
        if quantity < 1 {
            return self.clone();
        }

        let mut items = self.items.clone();
        if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            items.push(CartItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
                image_id: product.image_id.clone(),
            });
        }
        Self { items }
    }

    /// Replace the quantity of the line item with `id`.
    ///
    /// A quantity below 1 is a no-op: the item keeps its current quantity and
    /// is not removed. An unknown `id` is likewise a no-op.
    #[must_use]
    pub fn update_quantity(&self, id: &ProductId, quantity: u32) -> Self {
        if quantity < 1 {
            return self.clone();
        }

        let mut items = self.items.clone();
        if let Some(existing) = items.iter_mut().find(|item| item.id == *id) {
            existing.quantity = quantity;
        }
        Self { items }
    }

    /// Delete the line item with `id`, if present.
    #[must_use]
    pub fn remove_item(&self, id: &ProductId) -> Self {
        let mut items = self.items.clone();
        items.retain(|item| item.id != *id);
        Self { items }
    }

    /// Reset to an empty cart.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Subtotal over all line items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |acc, item| acc + item.price.times(item.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: Price::new(price),
            category: "Test".to_string(),
            image_id: format!("img-{id}"),
            rating: 4.0,
            review_count: 0,
            featured: false,
            images: None,
            sizes: None,
            tags: None,
        }
    }

    fn invariants_hold(cart: &CartState) -> bool {
        let unique = cart
            .items()
            .iter()
            .enumerate()
            .all(|(i, item)| !cart.items().iter().skip(i + 1).any(|other| other.id == item.id));
        unique && cart.items().iter().all(|item| item.quantity >= 1)
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let p = product("p1", 100);
        let cart = CartState::default().add_item(&p, 2).add_item(&p, 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_add_snapshots_price_at_add_time() {
        let mut p = product("p1", 100);
        let cart = CartState::default().add_item(&p, 1);

        // Catalog price change after the add must not leak into the cart.
        p.price = Price::new(999);
        let cart = cart.add_item(&product("p2", 50), 1);

        assert_eq!(cart.items()[0].price, Price::new(100));
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let before = CartState::default().add_item(&product("p1", 100), 2);
        let after = before.add_item(&product("p2", 50), 0);
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let cart = CartState::default()
            .add_item(&product("p1", 100), 2)
            .update_quantity(&ProductId::new("p1"), 7);
        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_update_to_zero_leaves_quantity_unchanged() {
        let before = CartState::default().add_item(&product("p1", 100), 2);
        let after = before.update_quantity(&ProductId::new("p1"), 0);
        assert_eq!(after, before);
        assert_eq!(after.items()[0].quantity, 2);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let before = CartState::default().add_item(&product("p1", 100), 2);
        let after = before.update_quantity(&ProductId::new("ghost"), 4);
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_deletes_only_matching_item() {
        let cart = CartState::default()
            .add_item(&product("p1", 100), 1)
            .add_item(&product("p2", 50), 1)
            .remove_item(&ProductId::new("p1"));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, ProductId::new("p2"));
    }

    #[test]
    fn test_remove_unknown_id_is_structurally_equal() {
        let before = CartState::default()
            .add_item(&product("p1", 100), 1)
            .add_item(&product("p2", 50), 3);
        let after = before.remove_item(&ProductId::new("ghost"));
        assert_eq!(after, before);
    }

    #[test]
    fn test_clear_always_yields_empty_cart() {
        assert!(CartState::default().clear().is_empty());

        let loaded = CartState::default()
            .add_item(&product("p1", 100), 4)
            .add_item(&product("p2", 50), 1);
        assert!(loaded.clear().is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let cart = CartState::default()
            .add_item(&product("b", 10), 1)
            .add_item(&product("a", 10), 1)
            .add_item(&product("c", 10), 1)
            .add_item(&product("a", 10), 2);

        let order: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_invariants_hold_across_operation_sequences() {
        let p1 = product("p1", 100);
        let p2 = product("p2", 50);
        let id1 = ProductId::new("p1");

        let mut cart = CartState::default();
        let steps: Vec<Box<dyn Fn(&CartState) -> CartState>> = vec![
            Box::new(move |c: &CartState| c.add_item(&p1, 2)),
            Box::new(move |c: &CartState| c.add_item(&p2, 1)),
            Box::new({
                let id = id1.clone();
                move |c: &CartState| c.update_quantity(&id, 0)
            }),
            Box::new({
                let id = id1.clone();
                move |c: &CartState| c.update_quantity(&id, 9)
            }),
            Box::new(move |c: &CartState| c.remove_item(&ProductId::new("ghost"))),
            Box::new(move |c: &CartState| c.remove_item(&ProductId::new("p2"))),
            Box::new(move |c: &CartState| c.clear()),
        ];

        for step in steps {
            cart = step(&cart);
            assert!(invariants_hold(&cart));
        }
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = CartState::default()
            .add_item(&product("p1", 100), 2)
            .add_item(&product("p2", 50), 3);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(CartState::default().item_count(), 0);
    }
}
