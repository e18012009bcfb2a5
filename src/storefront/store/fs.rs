use super::memory::InMemoryCatalog;
use super::CatalogStore;
use crate::error::{Result, StorefrontError};
use crate::model::Product;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    products: Vec<Product>,
}

/// A catalog read once from a JSON file. Never written back.
pub struct FileCatalog {
    path: PathBuf,
    inner: InMemoryCatalog,
}

impl FileCatalog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(StorefrontError::Store(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path).map_err(StorefrontError::Io)?;
        let file: CatalogFile =
            serde_json::from_str(&content).map_err(StorefrontError::Serialization)?;

        let mut inner = InMemoryCatalog::new().with_categories(file.categories);
        for product in file.products {
            inner = inner.with_product(product);
        }

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileCatalog {
    fn products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.inner.products_by_category(category)
    }

    fn product(&self, id: &str) -> Result<Product> {
        self.inner.product(id)
    }

    fn categories(&self) -> Result<Vec<String>> {
        self.inner.categories()
    }
}
