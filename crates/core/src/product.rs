//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A catalog product.
///
/// Products are immutable reference data from the cart's perspective: the
/// cart snapshots name and price at add time, so later catalog edits do not
/// reach into existing carts or order snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    /// Key into the image asset catalog.
    pub image_id: String,
    pub rating: f32,
    pub review_count: u32,
    /// Featured products back the home page and the recommendation fallback.
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
