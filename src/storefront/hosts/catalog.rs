//! Catalog listing: one card per product in the chosen category.

use super::cart::CartSink;
use super::{format_price, Observe};
use crate::abbrev::SizeAbbreviator;
use crate::error::{Result, StorefrontError};
use crate::model::{Product, SelectionMap};
use crate::selector::{AttributeSelector, AttributeView, OwnershipMode, SelectOutcome};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub in_stock: bool,
    pub attributes: Vec<AttributeView>,
}

/// A product card with its defaults pre-selected.
pub struct CatalogCard {
    product: Product,
    selector: AttributeSelector,
    mirror: Rc<RefCell<SelectionMap>>,
}

impl CatalogCard {
    pub fn mount(product: Product, observe: Observe) -> Self {
        let mirror = Rc::new(RefCell::new(SelectionMap::new()));
        let sink = Rc::clone(&mirror);

        let selector =
            AttributeSelector::builder(product.attributes.clone(), OwnershipMode::Defaulted)
                .on_change(move |id, name, value| sink.borrow_mut().merge(id, name, value))
                .observer(observe.observer(&format!("catalog-card:{}", product.id)))
                .mount();

        Self {
            product,
            selector,
            mirror,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The card's own copy, built from the selector's notifications.
    pub fn selection(&self) -> SelectionMap {
        self.mirror.borrow().clone()
    }

    pub fn click(&mut self, attribute_name: &str, value: &str) -> SelectOutcome {
        self.selector.click(attribute_name, value)
    }

    /// Adds the product with whatever the card currently shows as selected.
    pub fn quick_add(&self, cart: &mut dyn CartSink) -> Result<Uuid> {
        if !self.product.in_stock {
            return Err(StorefrontError::OutOfStock(self.product.name.clone()));
        }
        Ok(cart.add_to_cart(&self.product, &self.mirror.borrow()))
    }

    pub fn view(&self, abbreviator: &dyn SizeAbbreviator) -> CardView {
        CardView {
            id: self.product.id.clone(),
            name: self.product.name.clone(),
            price: format_price(&self.product.price),
            image: self
                .product
                .gallery
                .first()
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            in_stock: self.product.in_stock,
            attributes: self.selector.render(abbreviator),
        }
    }
}

/// Mounts a card for each product, in order.
pub fn mount_cards(products: Vec<Product>, observe: Observe) -> Vec<CatalogCard> {
    products
        .into_iter()
        .map(|product| CatalogCard::mount(product, observe))
        .collect()
}
