//! # Catalog
//!
//! The fixed list of products the store sells. Built once at startup and
//! read-only afterwards.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::MAX_CATALOG_PRODUCTS;

/// Products shipped with the store: (id, name, price in whole units).
const STANDARD_PRODUCTS: &[(&str, &str, i64)] = &[
    ("P001", "Pen", 10),
    ("P002", "Notebook", 50),
    ("P003", "Eraser", 5),
    ("P004", "Ruler", 20),
    ("P005", "Pencil", 8),
];

/// An ordered, read-only product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from `products`, keeping their order.
    ///
    /// Fails with `CapacityExceeded` past [`MAX_CATALOG_PRODUCTS`].
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        if products.len() > MAX_CATALOG_PRODUCTS {
            return Err(CoreError::CapacityExceeded {
                collection: "Catalog",
                max: MAX_CATALOG_PRODUCTS,
            });
        }

        Ok(Catalog { products })
    }

    /// The store's built-in catalog.
    pub fn standard() -> Self {
        Catalog {
            products: STANDARD_PRODUCTS
                .iter()
                .map(|&(id, name, price)| Product::new(id, name, Money::from_major(price)))
                .collect(),
        }
    }

    /// Finds a product by ID, ignoring ASCII case and surrounding whitespace.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.lookup("p003").unwrap().name, "Eraser");
    /// assert!(catalog.lookup("P404").is_err());
    /// ```
    pub fn lookup(&self, id: &str) -> CoreResult<&Product> {
        let id = id.trim();
        self.products
            .iter()
            .find(|p| p.matches_id(id))
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
