//! Styles for the storefront CLI.
//!
//! Templates only use the semantic names in [`names`]; the actual colours live in
//! [`STOREFRONT_STYLES`], registered once through `once_cell::sync::Lazy`.
//!
//! A style name that is not registered renders with a `(!?)` prefix so typos in templates
//! show up in the output instead of silently losing their styling.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
#[allow(dead_code)]
pub mod names {
    pub const TITLE: &str = "title";
    pub const PRICE: &str = "price";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    // Option states
    pub const OPTION: &str = "option";
    pub const SELECTED: &str = "selected";
    pub const READONLY: &str = "readonly";
    // Messages
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static STOREFRONT_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let muted = Style::new().color256(245);

    HashMap::from([
        (names::TITLE, Style::new().bold()),
        (names::PRICE, Style::new().green()),
        (names::LABEL, Style::new().cyan().bold()),
        (names::MUTED, muted.clone()),
        (names::FAINT, Style::new().color256(240)),
        (names::OPTION, Style::new()),
        (names::SELECTED, Style::new().black().on_yellow().bold()),
        (names::READONLY, muted.clone().italic()),
        (names::INFO, muted),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::ERROR, Style::new().red().bold()),
    ])
});

/// Applies a named style. With `use_color` off the text is returned as is.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match STOREFRONT_STYLES.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_is_off() {
        assert_eq!(apply(names::TITLE, "iMac", false), "iMac");
    }

    #[test]
    fn ansi_when_color_is_on() {
        let styled = apply(names::TITLE, "iMac", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("iMac"));
    }

    #[test]
    fn flags_unknown_styles() {
        assert_eq!(apply("tittle", "iMac", false), "(!?) iMac");
    }
}
