//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone files under
//! `templates/` and included here as string constants.
//!
//! Templates are loaded with `trim_blocks` and `lstrip_blocks`, so a line holding only a
//! block tag produces no output. Every other template line is one output line.
//!
//! The option grid is shared: `attributes.tmp` renders `item.attributes` and is included by
//! the list, detail and cart templates, which each bind their current entry to `item`.
//!
//! Anything beyond picking a style or skipping a line belongs in the Rust row structs in
//! `render.rs`, not in the templates.

pub const ATTRIBUTES_TEMPLATE: &str = include_str!("templates/attributes.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const CART_TEMPLATE: &str = include_str!("templates/cart.tmp");
pub const IDS_TEMPLATE: &str = include_str!("templates/ids.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");

/// Every template, registered under its file name.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("attributes.tmp", ATTRIBUTES_TEMPLATE),
    ("list.tmp", LIST_TEMPLATE),
    ("detail.tmp", DETAIL_TEMPLATE),
    ("cart.tmp", CART_TEMPLATE),
    ("ids.tmp", IDS_TEMPLATE),
    ("messages.tmp", MESSAGES_TEMPLATE),
    ("config.tmp", CONFIG_TEMPLATE),
];
