//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry point
//! for storefront operations, whatever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Normalizes inputs** (option picks and cart requests arrive as strings)
//! - **Owns session state**: the cart, the viewport and the configuration
//!
//! It does no printing and holds no business logic.
//!
//! [`configure`] stands apart from the facade: it edits the stored configuration and works
//! before any catalog is configured.
//!
//! `StorefrontApi<S: CatalogStore>` is generic over the catalog backend:
//! - Production: `StorefrontApi<FileCatalog>`
//! - Testing: `StorefrontApi<InMemoryCatalog>`

use crate::commands::{self, CartRequest, Pick, Screen};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::hosts::cart::{Cart, CartSink};
use crate::hosts::Observe;
use crate::layout::Viewport;
use crate::store::CatalogStore;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;
use uuid::Uuid;

pub struct StorefrontApi<S: CatalogStore> {
    store: S,
    config: StorefrontConfig,
    screen: Screen,
    cart: Cart,
}

impl<S: CatalogStore> StorefrontApi<S> {
    pub fn new(store: S, config: StorefrontConfig, viewport: Rc<dyn Viewport>) -> Self {
        let screen = Screen {
            viewport,
            breakpoint: config.layout_breakpoint,
            observe: Observe::Silent,
        };
        Self {
            store,
            config,
            screen,
            cart: Cart::new(),
        }
    }

    /// Attaches a tracing observer to every selector mounted from now on.
    pub fn with_observe(mut self, observe: Observe) -> Self {
        self.screen.observe = observe;
        self
    }

    /// Lists catalog cards. `None` falls back to the configured default category.
    pub fn list(&self, category: Option<&str>) -> Result<CmdResult> {
        let category = category.unwrap_or(&self.config.default_category);
        commands::list::run(&self.store, category, self.screen.observe)
    }

    pub fn view<I: AsRef<str>>(
        &mut self,
        product_id: &str,
        picks: &[I],
        add: bool,
    ) -> Result<CmdResult> {
        let picks = parse_all::<Pick, I>(picks)?;
        let cart: Option<&mut dyn CartSink> = if add { Some(&mut self.cart) } else { None };
        commands::view::run(&self.store, &self.screen, product_id, &picks, cart)
    }

    pub fn add_to_cart<I: AsRef<str>>(&mut self, requests: &[I]) -> Result<CmdResult> {
        let requests = parse_all::<CartRequest, I>(requests)?;
        commands::cart::run(&self.store, &self.screen, &requests, &mut self.cart)
    }

    pub fn quick_add(&mut self, product_id: &str) -> Result<CmdResult> {
        commands::cart::quick_add(&self.store, product_id, &mut self.cart, self.screen.observe)
    }

    pub fn show_cart(&self) -> CmdResult {
        commands::cart::show(&self.cart, self.screen.observe)
    }

    pub fn increment(&mut self, line_id: &str) -> Result<CmdResult> {
        self.cart.increment(&parse_line_id(line_id)?)?;
        Ok(self.show_cart())
    }

    pub fn decrement(&mut self, line_id: &str) -> Result<CmdResult> {
        self.cart.decrement(&parse_line_id(line_id)?)?;
        Ok(self.show_cart())
    }

    pub fn remove(&mut self, line_id: &str) -> Result<CmdResult> {
        self.cart.remove(&parse_line_id(line_id)?)?;
        Ok(self.show_cart())
    }

    pub fn test_ids(&self, product_id: &str, cart_context: bool) -> Result<CmdResult> {
        commands::ids::run(&self.store, &self.screen, product_id, cart_context)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

/// Shows or sets configuration values stored in `config_dir`.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

fn parse_all<T, I>(inputs: &[I]) -> Result<Vec<T>>
where
    T: FromStr<Err = StorefrontError>,
    I: AsRef<str>,
{
    inputs.iter().map(|s| T::from_str(s.as_ref())).collect()
}

fn parse_line_id(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input.trim())
        .map_err(|_| StorefrontError::Api(format!("Invalid cart line id: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
