//! # Catalog Store
//!
//! Products come from an external store. The [`CatalogStore`] trait is the only surface the
//! rest of the crate sees, so hosts and commands work the same against a JSON file or an
//! in-memory fixture.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: read-only JSON catalog
//!   ```text
//!   {
//!     "categories": ["clothes", "tech"],
//!     "products": [ { "id": "...", "name": "...", "category": "...", "attributes": [...] } ]
//!   }
//!   ```
//! - [`memory::InMemoryCatalog`]: built in code, for tests
//!
//! ## Categories
//!
//! Category names compare case-insensitively. `"all"` and the empty string select every
//! product.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

pub const ALL_CATEGORIES: &str = "all";

pub trait CatalogStore {
    /// Products in `category`, in catalog order.
    fn products_by_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Fails with `ProductNotFound` when no product has this id.
    fn product(&self, id: &str) -> Result<Product>;

    fn categories(&self) -> Result<Vec<String>>;
}

pub fn is_all_categories(category: &str) -> bool {
    let category = category.trim();
    category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
}

pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    if is_all_categories(category) {
        return products.to_vec();
    }
    let category = category.trim();
    products
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .cloned()
        .collect()
}
