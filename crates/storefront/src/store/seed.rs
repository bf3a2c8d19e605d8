//! Seed catalog.
//!
//! A fixed product list loaded into the in-memory store at startup, standing
//! in for the hosted database until one is attached.

use charkha_core::{Price, Product, ProductId};

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    image_id: &str,
    rating: f32,
    review_count: u32,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::new(price),
        category: category.to_string(),
        image_id: image_id.to_string(),
        rating,
        review_count,
        featured,
        images: None,
        sizes: None,
        tags: None,
    }
}

/// The seed catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    let mut catalog = vec![
        product(
            "prod-1",
            "Handloom Cotton Kurta",
            "Block-printed kurta in soft handloom cotton, dyed with natural indigo.",
            1299,
            "Apparel",
            "kurta-indigo",
            4.5,
            87,
            true,
        ),
        product(
            "prod-2",
            "Banarasi Silk Dupatta",
            "Handwoven Banarasi dupatta with zari border.",
            2499,
            "Apparel",
            "dupatta-banarasi",
            4.8,
            42,
            true,
        ),
        product(
            "prod-3",
            "Brass Diya Set",
            "Set of four hand-cast brass oil lamps with etched detailing.",
            449,
            "Home",
            "diya-brass",
            4.6,
            115,
            false,
        ),
        product(
            "prod-4",
            "Masala Dabba Spice Box",
            "Stainless steel spice box with seven inner bowls and a glass lid.",
            899,
            "Kitchen",
            "masala-dabba",
            4.7,
            203,
            true,
        ),
        product(
            "prod-5",
            "Jaipur Blue Pottery Bowl",
            "Quartz-glazed serving bowl, hand-painted in classic Jaipur blue.",
            749,
            "Home",
            "bowl-jaipur",
            4.3,
            58,
            false,
        ),
        product(
            "prod-6",
            "Kolhapuri Leather Chappals",
            "Vegetable-tanned leather chappals, handmade in Kolhapur.",
            1599,
            "Footwear",
            "chappal-kolhapuri",
            4.2,
            76,
            false,
        ),
        product(
            "prod-7",
            "Darjeeling First Flush Tea",
            "250g loose-leaf first flush from a single Darjeeling estate.",
            650,
            "Pantry",
            "tea-darjeeling",
            4.9,
            311,
            true,
        ),
        product(
            "prod-8",
            "Madhubani Painting Print",
            "Archival print of an original Madhubani fish motif, A3 size.",
            1150,
            "Art",
            "print-madhubani",
            4.4,
            29,
            false,
        ),
    ];

    if let Some(kurta) = catalog.first_mut() {
        kurta.sizes = Some(vec![
            "S".to_string(),
            "M".to_string(),
            "L".to_string(),
            "XL".to_string(),
        ]);
        kurta.tags = Some(vec!["handloom".to_string(), "indigo".to_string()]);
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = products();
        for (i, product) in catalog.iter().enumerate() {
            assert!(
                !catalog.iter().skip(i + 1).any(|other| other.id == product.id),
                "duplicate seed id {}",
                product.id
            );
        }
    }

    #[test]
    fn test_seed_has_featured_products_for_fallback() {
        // The recommendation fallback serves featured products; the seed must
        // always contain at least one.
        assert!(products().iter().any(|p| p.featured));
    }

    #[test]
    fn test_seed_prices_are_positive() {
        assert!(products().iter().all(|p| p.price.rupees() > 0));
    }
}
