//! Pricing: subtotal, shipping, and total for a cart.
//!
//! Totals are a pure function of the cart and are recomputed on every query;
//! the input is a handful of line items, so nothing is cached.

use serde::{Deserialize, Serialize};

use crate::cart::CartState;
use crate::types::Price;

/// Flat shipping fee applied to every non-empty cart.
///
/// No discounts, taxes, or currency conversion.
pub const FLAT_SHIPPING: Price = Price::new(50);

/// Derived money amounts for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CartState {
    /// Compute subtotal, shipping, and total for this cart.
    ///
    /// Shipping is [`FLAT_SHIPPING`] whenever the subtotal is positive, and
    /// zero for an empty (or all-zero-priced) cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = if subtotal.is_zero() {
            Price::ZERO
        } else {
            FLAT_SHIPPING
        };

        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;
    use crate::types::ProductId;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Price::new(price),
            category: "Test".to_string(),
            image_id: id.to_string(),
            rating: 4.0,
            review_count: 0,
            featured: false,
            images: None,
            sizes: None,
            tags: None,
        }
    }

    #[test]
    fn test_totals_for_known_cart() {
        // [{price: 100, qty: 2}, {price: 50, qty: 1}]
        let cart = CartState::default()
            .add_item(&product("p1", 100), 2)
            .add_item(&product("p2", 50), 1);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, Price::new(250));
        assert_eq!(totals.shipping, Price::new(50));
        assert_eq!(totals.total, Price::new(300));
    }

    #[test]
    fn test_empty_cart_ships_free_because_nothing_ships() {
        let totals = CartState::default().totals();
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.total, Price::ZERO);
    }

    #[test]
    fn test_totals_recompute_after_each_operation() {
        let p = product("p1", 100);
        let cart = CartState::default().add_item(&p, 1);
        assert_eq!(cart.totals().total, Price::new(150));

        let cart = cart.update_quantity(&ProductId::new("p1"), 3);
        assert_eq!(cart.totals().total, Price::new(350));

        let cart = cart.remove_item(&ProductId::new("p1"));
        assert_eq!(cart.totals().total, Price::ZERO);
    }
}
