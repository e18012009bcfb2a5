//! End-to-end flows through the public library API: a product travels from a catalog card
//! or product page into the cart, and the cart line keeps drawing whatever the cart holds.

use std::cell::RefCell;
use std::rc::Rc;
use storefront::abbrev::StandardSizes;
use storefront::hosts::cart::{Cart, CartLineItem, CartSink};
use storefront::hosts::catalog::CatalogCard;
use storefront::hosts::product::ProductDetailPage;
use storefront::hosts::Observe;
use storefront::layout::StaticViewport;
use storefront::model::{AttributeDefinition, AttributeKind, Product, SelectionMap};
use storefront::selector::{AttributeSelector, OwnershipMode};
use storefront::testid::{self, DisplayContext, TEST_ID_CONTRACT_VERSION};

fn jacket() -> Product {
    Product::new("jacket-canada-goosee", "Jacket")
        .with_attribute(
            AttributeDefinition::new(1, "Size", AttributeKind::Text)
                .with_display_value("S", "Small")
                .with_display_value("XL", "Extra Large"),
        )
        .with_attribute(
            AttributeDefinition::new(2, "Color", AttributeKind::Swatch)
                .with_display_value("#44ff03", "Green")
                .with_display_value("#03FFF7", "Cyan"),
        )
}

fn option_ids(views: &[storefront::selector::AttributeView]) -> Vec<String> {
    views
        .iter()
        .flat_map(|attr| attr.options.iter().map(|o| o.test_id.clone()))
        .collect()
}

#[test]
fn identifier_contract_is_stable() {
    assert_eq!(TEST_ID_CONTRACT_VERSION, 1);
    assert_eq!(
        testid::option_id(DisplayContext::Cart, "Touch ID in keyboard", "Yes", true),
        "cart-item-attribute-touch-id-in-keyboard-yes-selected"
    );
    assert_eq!(
        testid::option_id(DisplayContext::Product, "Color", "#44ff03", false),
        "product-attribute-color-#44FF03"
    );
}

#[test]
fn catalog_card_quick_add_lands_in_cart_line() {
    let card = CatalogCard::mount(jacket(), Observe::Silent);
    let mut cart = Cart::new();
    let id = card.quick_add(&mut cart).unwrap();

    let item = CartLineItem::mount(cart.line(&id).unwrap(), Observe::Silent);
    assert_eq!(
        option_ids(&item.view(&StandardSizes).attributes),
        vec![
            "cart-item-attribute-size-s-selected",
            "cart-item-attribute-size-xl",
            "cart-item-attribute-color-#44FF03-selected",
            "cart-item-attribute-color-#03FFF7",
        ]
    );
}

#[test]
fn product_page_choice_survives_into_cart_and_follows_edits() {
    let viewport = Rc::new(StaticViewport::new(1440));
    let mut page = ProductDetailPage::mount(jacket(), viewport.clone(), 768, Observe::Silent);
    page.click("Size", "XL");
    page.click_test_id("product-attribute-color-#03FFF7");

    let mut cart = Cart::new();
    let id = page.add_to_cart(&mut cart).unwrap();
    drop(page);
    assert_eq!(viewport.listener_count(), 0);

    let mut item = CartLineItem::mount(cart.line(&id).unwrap(), Observe::Silent);
    let view = item.view(&StandardSizes);
    assert_eq!(view.attributes[0].options[1].label.as_deref(), Some("XL"));
    assert!(view.attributes[0].options[1].active);

    let smaller = cart.line(&id).unwrap().selection.clone().with(1, "Size", "S");
    cart.replace_selection(&id, smaller).unwrap();
    assert!(item.sync(cart.line(&id).unwrap()));
    assert_eq!(item.selection().value_of("Size"), Some("S"));
    assert_eq!(item.selection().value_of("Color"), Some("#03FFF7"));
}

#[test]
fn host_mirror_matches_selector_after_every_change() {
    let mirror = Rc::new(RefCell::new(SelectionMap::new()));
    let sink = Rc::clone(&mirror);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&calls);

    let mut selector = AttributeSelector::builder(jacket().attributes, OwnershipMode::Defaulted)
        .on_change(move |id, name, value| {
            sink.borrow_mut().merge(id, name, value);
            log.borrow_mut().push(format!("{}:{}={}", id, name, value));
        })
        .mount();

    assert_eq!(*mirror.borrow(), *selector.selection());
    assert_eq!(*calls.borrow(), vec!["1:Size=S", "2:Color=#44ff03"]);

    selector.click("Color", "#03FFF7");
    selector.click("Size", "XL");
    selector.click("Size", "XXL");

    assert_eq!(*mirror.borrow(), *selector.selection());
    assert_eq!(calls.borrow().len(), 4);
}

#[test]
fn cart_sink_can_be_swapped_for_a_recorder() {
    #[derive(Default)]
    struct Recorder(Vec<(String, SelectionMap)>);

    impl CartSink for Recorder {
        fn add_to_cart(&mut self, product: &Product, selection: &SelectionMap) -> uuid::Uuid {
            self.0.push((product.id.clone(), selection.clone()));
            uuid::Uuid::new_v4()
        }
    }

    let card = CatalogCard::mount(jacket(), Observe::Silent);
    let mut recorder = Recorder::default();
    card.quick_add(&mut recorder).unwrap();

    assert_eq!(recorder.0.len(), 1);
    assert_eq!(recorder.0[0].0, "jacket-canada-goosee");
    assert_eq!(recorder.0[0].1, card.selection());
}
