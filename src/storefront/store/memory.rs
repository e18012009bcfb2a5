use super::{filter_by_category, CatalogStore};
use crate::error::{Result, StorefrontError};
use crate::model::Product;

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    categories: Vec<String>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Adds a product, registering its category the first time it is seen.
    pub fn with_product(mut self, product: Product) -> Self {
        if !product.category.is_empty()
            && !self
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.category))
        {
            self.categories.push(product.category.clone());
        }
        self.products.push(product);
        self
    }
}

impl CatalogStore for InMemoryCatalog {
    fn products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        Ok(filter_by_category(&self.products, category))
    }

    fn product(&self, id: &str) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_string()))
    }

    fn categories(&self) -> Result<Vec<String>> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_products_by_id() {
        let store = InMemoryCatalog::new()
            .with_product(Product::new("a", "A").with_category("tech"))
            .with_product(Product::new("b", "B").with_category("Tech"));

        assert_eq!(store.product("b").unwrap().name, "B");
        assert!(matches!(
            store.product("zzz"),
            Err(StorefrontError::ProductNotFound(id)) if id == "zzz"
        ));
        assert_eq!(store.categories().unwrap(), vec!["tech".to_string()]);
        assert_eq!(store.products_by_category("tech").unwrap().len(), 2);
    }
}
