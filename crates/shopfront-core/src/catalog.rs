//! # Catalog Seed
//!
//! The fixed demo catalog. There is no product service behind the
//! storefront; the catalog is rebuilt from this seed on every
//! initialization and never fetched or mutated.

use crate::types::Product;

/// Builds the fixed seed catalog.
///
/// Deterministic: every call returns the same six products in the same
/// order. Prices are in cents.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Wireless Bluetooth Headphones".to_string(),
            price_cents: 9999, // $99.99
            image: "/images/wireless-headphones.jpg".to_string(),
            description: "High-quality wireless headphones with noise cancellation \
                          and 30-hour battery life."
                .to_string(),
            category: "Electronics".to_string(),
            stock: 50,
            rating: 4.5,
            reviews: 128,
        },
        Product {
            id: "2".to_string(),
            name: "Smart Fitness Watch".to_string(),
            price_cents: 19999, // $199.99
            image: "/images/fitness-watch.jpg".to_string(),
            description: "Advanced fitness tracking with heart rate monitor, GPS, \
                          and smartphone integration."
                .to_string(),
            category: "Electronics".to_string(),
            stock: 30,
            rating: 4.3,
            reviews: 89,
        },
        Product {
            id: "3".to_string(),
            name: "Organic Cotton T-Shirt".to_string(),
            price_cents: 2999, // $29.99
            image: "/images/cotton-tshirt.jpg".to_string(),
            description: "Comfortable and sustainable organic cotton t-shirt \
                          available in multiple colors."
                .to_string(),
            category: "Clothing".to_string(),
            stock: 100,
            rating: 4.7,
            reviews: 203,
        },
        Product {
            id: "4".to_string(),
            name: "Premium Coffee Beans".to_string(),
            price_cents: 2499, // $24.99
            image: "/images/coffee-beans.jpg".to_string(),
            description: "Single-origin arabica coffee beans, freshly roasted for \
                          the perfect cup."
                .to_string(),
            category: "Food & Beverage".to_string(),
            stock: 75,
            rating: 4.8,
            reviews: 156,
        },
        Product {
            id: "5".to_string(),
            name: "Yoga Mat Pro".to_string(),
            price_cents: 4999, // $49.99
            image: "/images/yoga-mat.jpg".to_string(),
            description: "Non-slip yoga mat with extra cushioning for comfortable \
                          practice."
                .to_string(),
            category: "Sports".to_string(),
            stock: 40,
            rating: 4.6,
            reviews: 94,
        },
        Product {
            id: "6".to_string(),
            name: "Wireless Phone Charger".to_string(),
            price_cents: 3999, // $39.99
            image: "/images/phone-charger.jpg".to_string(),
            description: "Fast wireless charging pad compatible with all Qi-enabled \
                          devices."
                .to_string(),
            category: "Electronics".to_string(),
            stock: 60,
            rating: 4.4,
            reviews: 67,
        },
    ]
}

/// Derives the distinct category labels from a product list, in order of
/// first appearance.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_products(), seed_products());
    }

    #[test]
    fn test_seed_prices_are_non_negative() {
        assert!(seed_products().iter().all(|p| p.price_cents >= 0));
    }

    #[test]
    fn test_distinct_categories() {
        let categories = distinct_categories(&seed_products());
        assert_eq!(
            categories,
            vec!["Electronics", "Clothing", "Food & Beverage", "Sports"]
        );
    }
}
