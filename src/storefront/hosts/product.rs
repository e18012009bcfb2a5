//! # Product Detail Page
//!
//! Nothing is pre-selected: the shopper has to choose a value for every attribute before the
//! product can go into the cart. The page keeps its own copy of the selection, built only
//! from the selector's change notifications, and that copy is what gets added.
//!
//! The page also registers a resize listener on mount to switch between the vertical and
//! horizontal gallery layouts. The listener is released when the page is dropped.

use super::cart::CartSink;
use super::{format_price, Observe};
use crate::abbrev::SizeAbbreviator;
use crate::error::{Result, StorefrontError};
use crate::layout::{ResizeGuard, Viewport};
use crate::model::{Product, SelectionMap};
use crate::selector::{AttributeSelector, AttributeView, OptionRef, OwnershipMode, SelectOutcome};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub gallery: Vec<String>,
    pub in_stock: bool,
    pub horizontal: bool,
    pub attributes: Vec<AttributeView>,
    pub missing: Vec<String>,
    pub can_add: bool,
}

pub struct ProductDetailPage {
    product: Product,
    selector: AttributeSelector,
    selection: Rc<RefCell<SelectionMap>>,
    horizontal: Rc<Cell<bool>>,
    _resize: ResizeGuard,
}

impl ProductDetailPage {
    /// Mounts the page. The layout is horizontal while the viewport is at most `breakpoint`
    /// pixels wide.
    pub fn mount(
        product: Product,
        viewport: Rc<dyn Viewport>,
        breakpoint: u32,
        observe: Observe,
    ) -> Self {
        let selection = Rc::new(RefCell::new(SelectionMap::new()));
        let sink = Rc::clone(&selection);

        let selector =
            AttributeSelector::builder(product.attributes.clone(), OwnershipMode::Deferred)
                .on_change(move |id, name, value| sink.borrow_mut().merge(id, name, value))
                .observer(observe.observer(&format!("product-page:{}", product.id)))
                .mount();

        let horizontal = Rc::new(Cell::new(viewport.width() <= breakpoint));
        let layout = Rc::clone(&horizontal);
        let resize = ResizeGuard::acquire(
            viewport,
            Box::new(move |width| layout.set(width <= breakpoint)),
        );

        Self {
            product,
            selector,
            selection,
            horizontal,
            _resize: resize,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The page's copy of what the shopper picked.
    pub fn selection(&self) -> SelectionMap {
        self.selection.borrow().clone()
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal.get()
    }

    pub fn click(&mut self, attribute_name: &str, value: &str) -> SelectOutcome {
        self.selector.click(attribute_name, value)
    }

    pub fn click_test_id(&mut self, test_id: &str) -> SelectOutcome {
        self.selector.click_test_id(test_id)
    }

    pub fn resolve_option(&self, attribute_name: &str, value: &str) -> Option<OptionRef> {
        self.selector.resolve_option(attribute_name, value)
    }

    /// Attributes with options that the shopper has not chosen yet, in attribute order.
    pub fn missing_attributes(&self) -> Vec<String> {
        let selection = self.selection.borrow();
        self.product
            .attributes
            .iter()
            .filter(|attr| !attr.values.is_empty() && !selection.contains(&attr.name))
            .map(|attr| attr.name.clone())
            .collect()
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.product.in_stock && self.missing_attributes().is_empty()
    }

    pub fn add_to_cart(&self, cart: &mut dyn CartSink) -> Result<Uuid> {
        if !self.product.in_stock {
            return Err(StorefrontError::OutOfStock(self.product.name.clone()));
        }
        let missing = self.missing_attributes();
        if !missing.is_empty() {
            return Err(StorefrontError::IncompleteSelection {
                product: self.product.name.clone(),
                missing,
            });
        }
        Ok(cart.add_to_cart(&self.product, &self.selection.borrow()))
    }

    pub fn view(&self, abbreviator: &dyn SizeAbbreviator) -> DetailView {
        DetailView {
            id: self.product.id.clone(),
            name: self.product.name.clone(),
            price: format_price(&self.product.price),
            description: self.product.description.clone(),
            gallery: self.product.gallery.clone(),
            in_stock: self.product.in_stock,
            horizontal: self.is_horizontal(),
            attributes: self.selector.render(abbreviator),
            missing: self.missing_attributes(),
            can_add: self.can_add_to_cart(),
        }
    }
}
