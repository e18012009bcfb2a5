//! Identifier listing: the container id of every attribute followed by its option ids.
//!
//! In product context nothing is selected (as on a freshly mounted detail page). In cart
//! context a cart line is built from the catalog card's defaults and drawn, so the default
//! options carry the `-selected` suffix. Stock is not checked here.

use crate::abbrev::StandardSizes;
use crate::commands::view::mount_page;
use crate::commands::{CmdResult, Screen};
use crate::error::Result;
use crate::hosts::cart::{Cart, CartLineItem, CartSink};
use crate::hosts::catalog::CatalogCard;
use crate::selector::AttributeView;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    store: &S,
    screen: &Screen,
    product_id: &str,
    cart_context: bool,
) -> Result<CmdResult> {
    let attributes: Vec<AttributeView> = if cart_context {
        let card = CatalogCard::mount(store.product(product_id)?, screen.observe);
        let mut cart = Cart::new();
        cart.add_to_cart(card.product(), &card.selection());
        cart.lines()
            .iter()
            .flat_map(|line| {
                CartLineItem::mount(line, screen.observe)
                    .view(&StandardSizes)
                    .attributes
            })
            .collect()
    } else {
        mount_page(store, screen, product_id)?
            .view(&StandardSizes)
            .attributes
    };

    Ok(CmdResult::default().with_test_ids(flatten(&attributes)))
}

fn flatten(attributes: &[AttributeView]) -> Vec<String> {
    attributes
        .iter()
        .flat_map(|attr| {
            std::iter::once(attr.test_id.clone())
                .chain(attr.options.iter().map(|o| o.test_id.clone()))
        })
        .collect()
}
