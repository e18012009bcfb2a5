//! # Cart
//!
//! Lines are keyed by product and selection: adding the same product with an identical
//! selection bumps the quantity, any other selection starts a new line. Line items draw
//! their attributes with a `Controlled` selector that mirrors the line's selection and is
//! re-synced whenever the line changes.

use super::{format_price, Observe};
use crate::abbrev::SizeAbbreviator;
use crate::error::{Result, StorefrontError};
use crate::model::{Product, SelectionMap};
use crate::selector::{AttributeSelector, AttributeView, OwnershipMode, SelectOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Where hosts send "add this product with this selection".
pub trait CartSink {
    fn add_to_cart(&mut self, product: &Product, selection: &SelectionMap) -> Uuid;
}

#[derive(Debug, Clone)]
pub struct CartLine {
    pub id: Uuid,
    pub product: Product,
    pub selection: SelectionMap,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == *id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn increment(&mut self, id: &Uuid) -> Result<u32> {
        let line = self.line_mut(id)?;
        line.quantity += 1;
        Ok(line.quantity)
    }

    /// Removes the line when its quantity reaches zero. Returns the remaining quantity.
    pub fn decrement(&mut self, id: &Uuid) -> Result<u32> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_sub(1);
        let remaining = line.quantity;
        if remaining == 0 {
            self.lines.retain(|line| line.id != *id);
        }
        Ok(remaining)
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<CartLine> {
        let pos = self
            .lines
            .iter()
            .position(|line| line.id == *id)
            .ok_or(StorefrontError::CartLineNotFound(*id))?;
        Ok(self.lines.remove(pos))
    }

    /// Gives a line a new selection. If another line already holds the same product with that
    /// selection, the two are merged and the surviving line's id is returned.
    pub fn replace_selection(&mut self, id: &Uuid, selection: SelectionMap) -> Result<Uuid> {
        let product_id = self.line_mut(id)?.product.id.clone();

        let twin = self
            .lines
            .iter()
            .find(|line| {
                line.id != *id && line.product.id == product_id && line.selection == selection
            })
            .map(|line| line.id);

        match twin {
            Some(twin_id) => {
                let moved = self.remove(id)?;
                let survivor = self.line_mut(&twin_id)?;
                survivor.quantity += moved.quantity;
                Ok(twin_id)
            }
            None => {
                self.line_mut(id)?.selection = selection;
                Ok(*id)
            }
        }
    }

    fn line_mut(&mut self, id: &Uuid) -> Result<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.id == *id)
            .ok_or(StorefrontError::CartLineNotFound(*id))
    }
}

impl CartSink for Cart {
    fn add_to_cart(&mut self, product: &Product, selection: &SelectionMap) -> Uuid {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id && line.selection == *selection)
        {
            line.quantity += 1;
            return line.id;
        }

        let line = CartLine {
            id: Uuid::new_v4(),
            product: product.clone(),
            selection: selection.clone(),
            quantity: 1,
            added_at: Utc::now(),
        };
        let id = line.id;
        self.lines.push(line);
        id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub line_id: String,
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub attributes: Vec<AttributeView>,
}

/// One cart line as drawn in the cart overlay.
pub struct CartLineItem {
    line_id: Uuid,
    product: Product,
    quantity: u32,
    selector: AttributeSelector,
}

impl CartLineItem {
    pub fn mount(line: &CartLine, observe: Observe) -> Self {
        let selector =
            AttributeSelector::builder(line.product.attributes.clone(), OwnershipMode::Controlled)
                .host_selection(line.selection.clone())
                .observer(observe.observer(&format!("cart-line:{}", line.product.id)))
                .mount();

        Self {
            line_id: line.id,
            product: line.product.clone(),
            quantity: line.quantity,
            selector,
        }
    }

    pub fn line_id(&self) -> Uuid {
        self.line_id
    }

    pub fn selection(&self) -> &SelectionMap {
        self.selector.selection()
    }

    /// Re-reads the line after the host changed it. Returns whether the selection changed.
    pub fn sync(&mut self, line: &CartLine) -> bool {
        self.quantity = line.quantity;
        self.selector.sync_host_selection(&line.selection)
    }

    /// Cart attributes are display-only; this never changes anything.
    pub fn click(&mut self, attribute_name: &str, value: &str) -> SelectOutcome {
        self.selector.click(attribute_name, value)
    }

    pub fn view(&self, abbreviator: &dyn SizeAbbreviator) -> CartLineView {
        CartLineView {
            line_id: self.line_id.to_string(),
            product_id: self.product.id.clone(),
            name: self.product.name.clone(),
            price: format_price(&self.product.price),
            quantity: self.quantity,
            attributes: self.selector.render(abbreviator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::StandardSizes;
    use crate::model::{AttributeDefinition, AttributeKind};
    use crate::selector::IgnoreReason;

    fn jacket() -> Product {
        Product::new("jacket", "Canada Goose Jacket").with_attribute(
            AttributeDefinition::new(1, "Size", AttributeKind::Text)
                .with_display_value("S", "Small")
                .with_display_value("M", "Medium"),
        )
    }

    fn size(value: &str) -> SelectionMap {
        SelectionMap::new().with(1, "Size", value)
    }

    #[test]
    fn identical_selection_bumps_quantity() {
        let mut cart = Cart::new();
        let first = cart.add_to_cart(&jacket(), &size("S"));
        let again = cart.add_to_cart(&jacket(), &size("S"));
        let other = cart.add_to_cart(&jacket(), &size("M"));

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.line(&first).unwrap().quantity, 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        let id = cart.add_to_cart(&jacket(), &size("S"));
        cart.increment(&id).unwrap();

        assert_eq!(cart.decrement(&id).unwrap(), 1);
        assert_eq!(cart.decrement(&id).unwrap(), 0);
        assert!(cart.is_empty());
        assert!(matches!(
            cart.decrement(&id),
            Err(StorefrontError::CartLineNotFound(_))
        ));
    }

    #[test]
    fn replace_selection_merges_twins() {
        let mut cart = Cart::new();
        let small = cart.add_to_cart(&jacket(), &size("S"));
        let medium = cart.add_to_cart(&jacket(), &size("M"));
        cart.increment(&small).unwrap();

        let survivor = cart.replace_selection(&small, size("M")).unwrap();

        assert_eq!(survivor, medium);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&medium).unwrap().quantity, 3);
    }

    #[test]
    fn line_item_mirrors_line_selection() {
        let mut cart = Cart::new();
        let id = cart.add_to_cart(&jacket(), &size("M"));
        let mut item = CartLineItem::mount(cart.line(&id).unwrap(), Observe::Silent);

        let ids: Vec<String> = item.view(&StandardSizes).attributes[0]
            .options
            .iter()
            .map(|o| o.test_id.clone())
            .collect();
        assert_eq!(
            ids,
            vec!["cart-item-attribute-size-s", "cart-item-attribute-size-m-selected"]
        );

        assert_eq!(
            item.click("Size", "S"),
            SelectOutcome::Ignored(IgnoreReason::Controlled)
        );
        assert_eq!(item.selection(), &size("M"));
    }

    #[test]
    fn line_item_follows_host_changes() {
        let mut cart = Cart::new();
        let id = cart.add_to_cart(&jacket(), &size("S"));
        let mut item = CartLineItem::mount(cart.line(&id).unwrap(), Observe::Silent);

        cart.replace_selection(&id, size("M")).unwrap();
        cart.increment(&id).unwrap();
        assert!(item.sync(cart.line(&id).unwrap()));

        let view = item.view(&StandardSizes);
        assert_eq!(view.quantity, 2);
        assert!(view.attributes[0].options[1].active);
        assert_eq!(view.attributes[0].options[1].label.as_deref(), Some("M"));

        // Re-syncing the same line is a no-op.
        assert!(!item.sync(cart.line(&id).unwrap()));
    }
}
