use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    #[error("Select {} before adding {product} to the cart", .missing.join(", "))]
    IncompleteSelection {
        product: String,
        missing: Vec<String>,
    },

    #[error("No option matches: {0}")]
    UnknownOption(String),

    #[error("Cart line not found: {0}")]
    CartLineNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
