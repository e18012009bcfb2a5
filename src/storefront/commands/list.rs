use crate::abbrev::StandardSizes;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::hosts::catalog::mount_cards;
use crate::hosts::Observe;
use crate::store::{is_all_categories, CatalogStore};

pub fn run<S: CatalogStore>(store: &S, category: &str, observe: Observe) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !is_all_categories(category)
        && !store
            .categories()?
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category.trim()))
    {
        result.add_message(CmdMessage::info(format!("Unknown category: {}", category)));
        return Ok(result);
    }

    let products = store.products_by_category(category)?;
    if products.is_empty() {
        result.add_message(CmdMessage::info(format!("No products in {}", category)));
        return Ok(result);
    }

    let cards = mount_cards(products, observe)
        .iter()
        .map(|card| card.view(&StandardSizes))
        .collect();
    Ok(result.with_cards(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeDefinition, AttributeKind, Product};
    use crate::store::memory::InMemoryCatalog;

    fn store() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_categories(vec!["all".into(), "clothes".into(), "tech".into(), "toys".into()])
            .with_product(
                Product::new("huarache", "Nike Air Huarache")
                    .with_category("clothes")
                    .with_attribute(
                        AttributeDefinition::new(1, "Size", AttributeKind::Text)
                            .with_value("40")
                            .with_value("41"),
                    ),
            )
            .with_product(Product::new("ps-5", "PlayStation 5").with_category("tech"))
    }

    #[test]
    fn lists_every_product_for_all() {
        let result = run(&store(), "all", Observe::Silent).unwrap();
        assert_eq!(result.cards.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_category_ignoring_case() {
        let result = run(&store(), "Clothes", Observe::Silent).unwrap();
        assert_eq!(result.cards.len(), 1);
        assert_eq!(result.cards[0].id, "huarache");
        assert_eq!(
            result.cards[0].attributes[0].options[0].test_id,
            "product-attribute-size-40-selected"
        );
    }

    #[test]
    fn unknown_category_is_reported() {
        let result = run(&store(), "garden", Observe::Silent).unwrap();
        assert!(result.cards.is_empty());
        assert_eq!(result.messages[0].content, "Unknown category: garden");
    }

    #[test]
    fn empty_category_is_reported() {
        let result = run(&store(), "toys", Observe::Silent).unwrap();
        assert!(result.cards.is_empty());
        assert_eq!(result.messages[0].content, "No products in toys");
    }
}
