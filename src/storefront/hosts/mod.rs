//! # Host Views
//!
//! Each host mounts an [`AttributeSelector`](crate::selector::AttributeSelector) in the mode
//! its context calls for and consumes change notifications in its own way:
//!
//! - [`catalog::CatalogCard`]: `Defaulted`. Mirrors the announced defaults so a quick add
//!   uses exactly what the card shows.
//! - [`product::ProductDetailPage`]: `Deferred`. Accumulates every `(id, name, value)` triple
//!   into its own map, which is what gets added to the cart.
//! - [`cart::CartLineItem`]: `Controlled`. The cart line is the source of truth; the host
//!   pushes it in again whenever the line changes.
//!
//! Uncontrolled hosts never push their copy back into the selector. Controlled hosts never
//! expect the selector to change anything.

use crate::observe::{SelectorObserver, TracingObserver};

pub mod cart;
pub mod catalog;
pub mod product;

/// Whether mounted selectors get an observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Observe {
    #[default]
    Silent,
    Tracing,
}

impl Observe {
    pub fn observer(&self, host: &str) -> Option<Box<dyn SelectorObserver>> {
        match self {
            Observe::Silent => None,
            Observe::Tracing => Some(Box::new(TracingObserver::new(host))),
        }
    }
}

pub(crate) fn format_price(price: &crate::model::Price) -> String {
    format!("{}{:.2}", price.currency_symbol, price.amount)
}
