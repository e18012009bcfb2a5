//! # Rendering Module
//!
//! Turns `CmdResult` views into styled terminal text through the minijinja templates in
//! `templates/`. Colour is auto-detected from stdout unless the caller forces it, which
//! `--no-color` and the tests do.
//!
//! Row structs here pre-compute every string a template prints (option markers, stock
//! notes, status lines) so the templates stay free of logic.

use super::styles::{self, names};
use super::templates::TEMPLATES;
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use storefront::api::{CmdMessage, MessageLevel};
use storefront::hosts::cart::CartLineView;
use storefront::hosts::catalog::CardView;
use storefront::hosts::product::DetailView;
use storefront::selector::{AttributeView, OptionView};
use unicode_width::UnicodeWidthStr;

const ACTIVE_MARKER: &str = "●";
const INACTIVE_MARKER: &str = "○";

#[derive(Serialize)]
struct OptionRow {
    marker: &'static str,
    text: String,
    padding: String,
    test_id: String,
    style: &'static str,
}

#[derive(Serialize)]
struct AttributeRow {
    name: String,
    test_id: String,
    options: Vec<OptionRow>,
}

#[derive(Serialize)]
struct CardRow {
    id: String,
    name: String,
    price: String,
    image: String,
    stock: String,
    attributes: Vec<AttributeRow>,
}

#[derive(Serialize)]
struct DetailRow {
    id: String,
    name: String,
    price: String,
    stock: String,
    layout: String,
    description: String,
    status: String,
    status_style: &'static str,
    attributes: Vec<AttributeRow>,
}

#[derive(Serialize)]
struct CartRow {
    line_id: String,
    name: String,
    price: String,
    quantity: u32,
    attributes: Vec<AttributeRow>,
}

#[derive(Serialize)]
struct ConfigRow {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct MessageRow {
    content: String,
    style: &'static str,
}

fn option_row(option: &OptionView) -> OptionRow {
    let text = match (&option.swatch, &option.label) {
        (Some(swatch), _) => format!("{} {}", option.display_value, swatch),
        (None, Some(label)) => label.clone(),
        (None, None) => option.display_value.clone(),
    };
    let style = if option.active {
        names::SELECTED
    } else if !option.interactive {
        names::READONLY
    } else {
        names::OPTION
    };

    OptionRow {
        marker: if option.active {
            ACTIVE_MARKER
        } else {
            INACTIVE_MARKER
        },
        text,
        padding: String::new(),
        test_id: option.test_id.clone(),
        style,
    }
}

/// Option texts are padded to a common display width so the test ids line up.
fn attribute_rows(attributes: &[AttributeView]) -> Vec<AttributeRow> {
    attributes
        .iter()
        .map(|attr| {
            let mut options: Vec<OptionRow> = attr.options.iter().map(option_row).collect();
            let column = options.iter().map(|o| o.text.width()).max().unwrap_or(0);
            for option in &mut options {
                option.padding = " ".repeat(column - option.text.width());
            }
            AttributeRow {
                name: attr.name.clone(),
                test_id: attr.test_id.clone(),
                options,
            }
        })
        .collect()
}

fn stock_note(in_stock: bool) -> String {
    if in_stock {
        String::new()
    } else {
        "OUT OF STOCK".to_string()
    }
}

fn environment(use_color: bool) -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    Ok(env)
}

fn render_template<T: Serialize>(
    name: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let env = environment(use_color)?;
    let template = env.get_template(name)?;
    template.render(data)
}

pub fn render_cards(cards: &[CardView], use_color: Option<bool>) -> String {
    #[derive(Serialize)]
    struct Data {
        cards: Vec<CardRow>,
    }

    let data = Data {
        cards: cards
            .iter()
            .map(|card| CardRow {
                id: card.id.clone(),
                name: card.name.clone(),
                price: card.price.clone(),
                image: card.image.clone(),
                stock: stock_note(card.in_stock),
                attributes: attribute_rows(&card.attributes),
            })
            .collect(),
    };

    render_template("list.tmp", &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_detail(detail: &DetailView, use_color: Option<bool>) -> String {
    #[derive(Serialize)]
    struct Data {
        detail: DetailRow,
    }

    let (status, status_style) = if !detail.in_stock {
        ("Out of stock".to_string(), names::ERROR)
    } else if detail.can_add {
        ("Ready to add to cart".to_string(), names::SUCCESS)
    } else {
        (format!("Choose: {}", detail.missing.join(", ")), names::WARNING)
    };

    let images = detail.gallery.len();
    let layout = format!(
        "{} image{}, {} gallery",
        images,
        if images == 1 { "" } else { "s" },
        if detail.horizontal {
            "horizontal"
        } else {
            "vertical"
        }
    );

    let data = Data {
        detail: DetailRow {
            id: detail.id.clone(),
            name: detail.name.clone(),
            price: detail.price.clone(),
            stock: stock_note(detail.in_stock),
            layout,
            description: detail.description.clone(),
            status,
            status_style,
            attributes: attribute_rows(&detail.attributes),
        },
    };

    render_template("detail.tmp", &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_cart(lines: &[CartLineView], use_color: Option<bool>) -> String {
    #[derive(Serialize)]
    struct Data {
        lines: Vec<CartRow>,
        summary: String,
    }

    let units: u32 = lines.iter().map(|line| line.quantity).sum();
    let data = Data {
        lines: lines
            .iter()
            .map(|line| CartRow {
                line_id: line.line_id.clone(),
                name: line.name.clone(),
                price: line.price.clone(),
                quantity: line.quantity,
                attributes: attribute_rows(&line.attributes),
            })
            .collect(),
        summary: format!(
            "{} item{} in cart",
            units,
            if units == 1 { "" } else { "s" }
        ),
    };

    render_template("cart.tmp", &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Identifiers only, one per line. Never styled, so the output can be piped.
pub fn render_ids(ids: &[String]) -> String {
    #[derive(Serialize)]
    struct Data<'a> {
        ids: &'a [String],
    }

    render_template("ids.tmp", &Data { ids }, Some(false)).unwrap_or_else(|_| {
        ids.iter().map(|id| format!("{}\n", id)).collect()
    })
}

/// `key = value` lines with the keys padded to one column.
pub fn render_config(entries: &[(String, String)], use_color: Option<bool>) -> String {
    #[derive(Serialize)]
    struct Data {
        entries: Vec<ConfigRow>,
    }

    let column = entries.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    let data = Data {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigRow {
                key: key.clone(),
                padding: " ".repeat(column - key.width()),
                value: value.clone(),
            })
            .collect(),
    };

    render_template("config.tmp", &data, use_color).unwrap_or_else(|_| {
        entries
            .iter()
            .map(|(key, value)| format!("{} = {}\n", key, value))
            .collect()
    })
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    #[derive(Serialize)]
    struct Data {
        messages: Vec<MessageRow>,
    }

    let data = Data {
        messages: messages
            .iter()
            .map(|msg| MessageRow {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages.tmp", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront::model::AttributeKind;

    fn option(value: &str, test_id: &str, active: bool, interactive: bool) -> OptionView {
        OptionView {
            value: value.to_string(),
            display_value: value.to_string(),
            test_id: test_id.to_string(),
            active,
            interactive,
            swatch: None,
            label: Some(value.to_string()),
        }
    }

    fn size_attribute(prefix: &str, interactive: bool) -> AttributeView {
        AttributeView {
            id: 1,
            name: "Size".to_string(),
            kind: AttributeKind::Text,
            test_id: format!("{}-size", prefix),
            compact: !interactive,
            options: vec![
                option("S", &format!("{}-size-s-selected", prefix), true, interactive),
                option("M", &format!("{}-size-m", prefix), false, interactive),
            ],
        }
    }

    #[test]
    fn renders_cards_with_option_ids() {
        let cards = vec![CardView {
            id: "jacket".to_string(),
            name: "Jacket".to_string(),
            price: "$518.47".to_string(),
            image: "https://example.com/jacket.jpg".to_string(),
            in_stock: false,
            attributes: vec![size_attribute("product-attribute", true)],
        }];

        let output = render_cards(&cards, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Jacket $518.47  OUT OF STOCK");
        assert_eq!(lines[2], "  Size product-attribute-size");
        assert_eq!(lines[3], "    ● S product-attribute-size-s-selected");
        assert_eq!(lines[4], "    ○ M product-attribute-size-m");
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn separates_cards_with_blank_line() {
        let card = CardView {
            id: "ps-5".to_string(),
            name: "PlayStation 5".to_string(),
            price: "$844.02".to_string(),
            image: String::new(),
            in_stock: true,
            attributes: vec![],
        };
        let output = render_cards(&[card.clone(), card], Some(false));
        assert_eq!(output.lines().filter(|l| l.is_empty()).count(), 1);
        assert!(output.starts_with("PlayStation 5 $844.02\n"));
    }

    #[test]
    fn renders_detail_status() {
        let detail = DetailView {
            id: "jacket".to_string(),
            name: "Jacket".to_string(),
            price: "$518.47".to_string(),
            description: String::new(),
            gallery: vec!["a.jpg".to_string()],
            in_stock: true,
            horizontal: false,
            attributes: vec![size_attribute("product-attribute", true)],
            missing: vec!["Color".to_string()],
            can_add: false,
        };

        let output = render_detail(&detail, Some(false));
        assert!(output.contains("1 image, vertical gallery"));
        assert!(output.ends_with("Choose: Color\n"));
    }

    #[test]
    fn renders_cart_summary() {
        let lines = vec![CartLineView {
            line_id: "0b1f".to_string(),
            product_id: "jacket".to_string(),
            name: "Jacket".to_string(),
            price: "$518.47".to_string(),
            quantity: 2,
            attributes: vec![size_attribute("cart-item-attribute", false)],
        }];

        let output = render_cart(&lines, Some(false));
        assert!(output.starts_with("2 x Jacket $518.47\n"));
        assert!(output.contains("    ○ M cart-item-attribute-size-m\n"));
        assert!(output.ends_with("2 items in cart\n"));
    }

    #[test]
    fn renders_bare_ids() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_ids(&ids), "a\nb\n");
    }

    #[test]
    fn renders_config_in_aligned_column() {
        let entries = vec![
            ("default_category".to_string(), "all".to_string()),
            ("layout_breakpoint".to_string(), "768".to_string()),
        ];
        assert_eq!(
            render_config(&entries, Some(false)),
            "default_category  = all\nlayout_breakpoint = 768\n"
        );
    }

    #[test]
    fn renders_messages_with_color() {
        let messages = vec![CmdMessage::success("Added Jacket to the cart")];
        let output = render_messages(&messages, Some(true));
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Added Jacket to the cart"));
        assert_eq!(render_messages(&messages, Some(false)), "Added Jacket to the cart\n");
    }
}
