//! # Test Identifiers
//!
//! Every rendered attribute container and option carries a deterministic identifier that
//! external UI automation uses to find and assert on nodes. The format is effectively a wire
//! format: changing it breaks QA tooling, so any change must bump [`TEST_ID_CONTRACT_VERSION`].
//!
//! ## Format
//!
//! ```text
//! container:  {prefix}-{kebab(attribute name)}
//! option:     {container}-{normalized(value)}[-selected]
//!
//! prefix:     product-attribute      (catalog cards, product page)
//!             cart-item-attribute    (cart line items)
//! ```
//!
//! `kebab` lowercases and collapses every run of whitespace into a single `-`.
//!
//! Values are normalized as follows (contract version 1):
//! - hex colours (values starting with `#`) keep the hash and are uppercased:
//!   `#44ff03` → `#44FF03`
//! - everything else is kebab-cased: `Extra Large` → `extra-large`
//!
//! All functions here are pure: the same context, name, value and selection flag always give
//! the same string, and toggling the flag only adds or removes the `-selected` suffix.

pub const TEST_ID_CONTRACT_VERSION: u32 = 1;

const PRODUCT_PREFIX: &str = "product-attribute";
const CART_PREFIX: &str = "cart-item-attribute";
const SELECTED_SUFFIX: &str = "-selected";

/// Where a selector is drawn. Decides the identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayContext {
    /// Catalog cards and the product page.
    Product,
    /// Cart line items.
    Cart,
}

impl DisplayContext {
    pub fn prefix(&self) -> &'static str {
        match self {
            DisplayContext::Product => PRODUCT_PREFIX,
            DisplayContext::Cart => CART_PREFIX,
        }
    }
}

impl std::fmt::Display for DisplayContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayContext::Product => write!(f, "product"),
            DisplayContext::Cart => write!(f, "cart"),
        }
    }
}

/// Lowercases `s` and replaces each run of whitespace with a single hyphen.
///
/// Leading and trailing whitespace runs become hyphens as well, so `" a  b"` is `"-a-b"`.
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    out
}

pub fn is_hex_color(value: &str) -> bool {
    value.starts_with('#')
}

pub fn normalize_value(value: &str) -> String {
    if is_hex_color(value) {
        value.to_uppercase()
    } else {
        kebab_case(value)
    }
}

pub fn container_id(context: DisplayContext, attribute_name: &str) -> String {
    format!("{}-{}", context.prefix(), kebab_case(attribute_name))
}

pub fn option_id(
    context: DisplayContext,
    attribute_name: &str,
    value: &str,
    is_selected: bool,
) -> String {
    let mut id = format!(
        "{}-{}",
        container_id(context, attribute_name),
        normalize_value(value)
    );
    if is_selected {
        id.push_str(SELECTED_SUFFIX);
    }
    id
}
