//! Catalog filtering and sorting.

use serde::Deserialize;

use charkha_core::Product;

/// Sort orders offered by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order (no re-sorting).
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
}

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Category filter; `All` (or absent) matches everything.
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

impl CatalogQuery {
    /// Apply the category filter, name search, and sort to a catalog listing.
    #[must_use]
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        if let Some(category) = self.category.as_deref()
            && category != "All"
        {
            products.retain(|p| p.category == category);
        }

        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            products.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        match self.sort {
            Some(SortOrder::PriceAsc) => products.sort_by_key(|p| p.price),
            Some(SortOrder::PriceDesc) => {
                products.sort_by_key(|p| std::cmp::Reverse(p.price));
            }
            Some(SortOrder::Rating) => {
                products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            Some(SortOrder::Relevance) | None => {}
        }

        products
    }
}
