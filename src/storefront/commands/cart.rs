use crate::abbrev::StandardSizes;
use crate::commands::view::{apply_picks, mount_page};
use crate::commands::{CartRequest, CmdMessage, CmdResult, Screen};
use crate::error::Result;
use crate::hosts::cart::{Cart, CartLineItem};
use crate::hosts::catalog::CatalogCard;
use crate::hosts::Observe;
use crate::store::CatalogStore;

/// Adds each request through the product page flow, then renders the whole cart.
pub fn run<S: CatalogStore>(
    store: &S,
    screen: &Screen,
    requests: &[CartRequest],
    cart: &mut Cart,
) -> Result<CmdResult> {
    for request in requests {
        let mut page = mount_page(store, screen, &request.product_id)?;
        apply_picks(&mut page, &request.picks)?;
        page.add_to_cart(cart)?;
    }
    Ok(show(cart, screen.observe))
}

/// Adds a product straight from its catalog card, with the card's defaults.
pub fn quick_add<S: CatalogStore>(
    store: &S,
    product_id: &str,
    cart: &mut Cart,
    observe: Observe,
) -> Result<CmdResult> {
    let card = CatalogCard::mount(store.product(product_id)?, observe);
    card.quick_add(cart)?;

    let mut result = show(cart, observe);
    result.add_message(CmdMessage::success(format!(
        "Added {} to the cart",
        card.product().name
    )));
    Ok(result)
}

pub fn show(cart: &Cart, observe: Observe) -> CmdResult {
    let mut result = CmdResult::default();
    if cart.is_empty() {
        result.add_message(CmdMessage::info("Cart is empty"));
        return result;
    }

    let lines = cart
        .lines()
        .iter()
        .map(|line| CartLineItem::mount(line, observe).view(&StandardSizes))
        .collect();
    result.with_cart_lines(lines)
}
