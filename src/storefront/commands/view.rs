use crate::abbrev::StandardSizes;
use crate::commands::{CmdMessage, CmdResult, Pick, Screen};
use crate::error::{Result, StorefrontError};
use crate::hosts::cart::CartSink;
use crate::hosts::product::ProductDetailPage;
use crate::selector::{IgnoreReason, SelectOutcome};
use crate::store::CatalogStore;

/// Mounts the detail page for `product_id`, clicks every pick in order and, if asked, adds
/// the result to `cart`.
pub fn run<S: CatalogStore>(
    store: &S,
    screen: &Screen,
    product_id: &str,
    picks: &[Pick],
    add: Option<&mut dyn CartSink>,
) -> Result<CmdResult> {
    let mut page = mount_page(store, screen, product_id)?;
    apply_picks(&mut page, picks)?;

    let mut result = CmdResult::default();
    if let Some(cart) = add {
        page.add_to_cart(cart)?;
        result.add_message(CmdMessage::success(format!(
            "Added {} to the cart",
            page.product().name
        )));
    } else if !page.missing_attributes().is_empty() && !picks.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Still to choose: {}",
            page.missing_attributes().join(", ")
        )));
    }

    Ok(result.with_detail(page.view(&StandardSizes)))
}

pub(crate) fn mount_page<S: CatalogStore>(
    store: &S,
    screen: &Screen,
    product_id: &str,
) -> Result<ProductDetailPage> {
    let product = store.product(product_id)?;
    Ok(ProductDetailPage::mount(
        product,
        screen.viewport.clone(),
        screen.breakpoint,
        screen.observe,
    ))
}

pub(crate) fn apply_picks(page: &mut ProductDetailPage, picks: &[Pick]) -> Result<()> {
    for pick in picks {
        let outcome = match pick {
            Pick::Option { attribute, value } => match page.resolve_option(attribute, value) {
                Some(option) => page.click(&option.attribute_name, &option.value),
                None => SelectOutcome::Ignored(IgnoreReason::UnknownOption),
            },
            Pick::TestId(id) => page.click_test_id(id),
        };

        if outcome == SelectOutcome::Ignored(IgnoreReason::UnknownOption) {
            return Err(StorefrontError::UnknownOption(format!(
                "{} (product {})",
                pick,
                page.product().id
            )));
        }
    }
    Ok(())
}
