use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::hosts::cart::CartLineView;
use crate::hosts::catalog::CardView;
use crate::hosts::product::DetailView;
use crate::hosts::Observe;
use crate::layout::Viewport;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub mod cart;
pub mod config;
pub mod ids;
pub mod list;
pub mod view;

/// What the hosts are mounted against: the viewport, the layout breakpoint and whether
/// selectors get a tracing observer.
#[derive(Clone)]
pub struct Screen {
    pub viewport: Rc<dyn Viewport>,
    pub breakpoint: u32,
    pub observe: Observe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub cards: Vec<CardView>,
    pub detail: Option<DetailView>,
    pub cart_lines: Vec<CartLineView>,
    /// Bare test identifiers, in document order.
    pub test_ids: Vec<String>,
    pub config: Option<StorefrontConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cards(mut self, cards: Vec<CardView>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_detail(mut self, detail: DetailView) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_cart_lines(mut self, lines: Vec<CartLineView>) -> Self {
        self.cart_lines = lines;
        self
    }

    pub fn with_test_ids(mut self, ids: Vec<String>) -> Self {
        self.test_ids = ids;
        self
    }

    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// One option pick as typed on the command line.
///
/// `Name=Value` names the attribute and value loosely (see
/// [`AttributeSelector::resolve_option`](crate::selector::AttributeSelector::resolve_option)).
/// Anything without `=` is taken as an option test identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Option { attribute: String, value: String },
    TestId(String),
}

impl FromStr for Pick {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StorefrontError::Api("Empty option pick".to_string()));
        }
        match s.split_once('=') {
            Some((attribute, value)) => {
                let (attribute, value) = (attribute.trim(), value.trim());
                if attribute.is_empty() || value.is_empty() {
                    return Err(StorefrontError::Api(format!(
                        "Invalid option pick '{}', expected Name=Value",
                        s
                    )));
                }
                Ok(Pick::Option {
                    attribute: attribute.to_string(),
                    value: value.to_string(),
                })
            }
            None => Ok(Pick::TestId(s.to_string())),
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pick::Option { attribute, value } => write!(f, "{}={}", attribute, value),
            Pick::TestId(id) => write!(f, "{}", id),
        }
    }
}

/// A product and the picks to make before adding it: `<product-id>[:Name=Value,...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub product_id: String,
    pub picks: Vec<Pick>,
}

impl FromStr for CartRequest {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        let (product_id, rest) = match s.split_once(':') {
            Some((id, rest)) => (id.trim(), Some(rest)),
            None => (s.trim(), None),
        };
        if product_id.is_empty() {
            return Err(StorefrontError::Api(format!("Missing product id in '{}'", s)));
        }

        let picks = rest
            .map(|rest| {
                rest.split(',')
                    .filter(|part| !part.trim().is_empty())
                    .map(Pick::from_str)
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(CartRequest {
            product_id: product_id.to_string(),
            picks,
        })
    }
}
