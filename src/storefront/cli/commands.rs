//! # CLI Layer
//!
//! This module is **one possible UI client** for the storefront library. It is the only
//! place that parses arguments, writes to stdout/stderr and installs the tracing subscriber.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads configuration, opens the catalog and builds the API
//! - `handle_config()`: Runs before `init_context()`, so it works without a catalog
//! - `handle_*()`: Per-command handlers that call the API and print rendered output

use super::render::{
    render_cards, render_cart, render_config, render_detail, render_ids, render_messages,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;
use storefront::api::{configure, CmdResult, ConfigAction, StorefrontApi};
use storefront::config::{config_dir, StorefrontConfig};
use storefront::error::{Result, StorefrontError};
use storefront::hosts::Observe;
use storefront::layout::StaticViewport;
use storefront::store::fs::FileCatalog;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const NO_CATALOG: &str =
    "No catalog configured: pass --catalog <FILE> or set catalog_file in .storefront/config.json";

struct AppContext {
    api: StorefrontApi<FileCatalog>,
    use_color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.clone(), value.clone(), use_color(&cli));
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { category }) => handle_list(&ctx, category),
        Some(Commands::View {
            product_id,
            picks,
            add,
        }) => handle_view(&mut ctx, &product_id, &picks, add),
        Some(Commands::Cart { items }) => handle_cart(&mut ctx, &items),
        Some(Commands::Ids { product_id, cart }) => handle_ids(&ctx, &product_id, cart),
        Some(Commands::Config { .. }) | None => handle_list(&ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "storefront=debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn use_color(cli: &Cli) -> Option<bool> {
    if cli.no_color {
        Some(false)
    } else {
        None
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = current_dir();

    let config = match config_dir(&cwd) {
        Some(dir) => StorefrontConfig::load(&dir).unwrap_or_else(|e| {
            tracing::warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            StorefrontConfig::default()
        }),
        None => StorefrontConfig::default(),
    };

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path(&cwd))
        .ok_or_else(|| StorefrontError::Api(NO_CATALOG.to_string()))?;
    tracing::debug!(catalog = %catalog_path.display(), width = cli.width, "opening catalog");

    let store = FileCatalog::open(&catalog_path)?;
    let api = StorefrontApi::new(store, config, Rc::new(StaticViewport::new(cli.width)))
        .with_observe(Observe::Tracing);

    Ok(AppContext {
        api,
        use_color: use_color(cli),
    })
}

fn handle_list(ctx: &AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.list(category.as_deref())?;
    print!("{}", render_cards(&result.cards, ctx.use_color));
    print_messages(ctx.use_color, &result);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, product_id: &str, picks: &[String], add: bool) -> Result<()> {
    let result = ctx.api.view(product_id, picks, add)?;
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail, ctx.use_color));
    }
    print_messages(ctx.use_color, &result);
    Ok(())
}

fn handle_cart(ctx: &mut AppContext, items: &[String]) -> Result<()> {
    let result = ctx.api.add_to_cart(items)?;
    if !result.cart_lines.is_empty() {
        print!("{}", render_cart(&result.cart_lines, ctx.use_color));
    }
    print_messages(ctx.use_color, &result);
    Ok(())
}

fn handle_ids(ctx: &AppContext, product_id: &str, cart: bool) -> Result<()> {
    let result = ctx.api.test_ids(product_id, cart)?;
    print!("{}", render_ids(&result.test_ids));
    Ok(())
}

fn handle_config(
    key: Option<String>,
    value: Option<String>,
    use_color: Option<bool>,
) -> Result<()> {
    let dir = config_dir(&current_dir())
        .ok_or_else(|| StorefrontError::Api("No config directory available".to_string()))?;
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = configure(&dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(&config.list_all(), use_color));
        }
    }
    print_messages(use_color, &result);
    Ok(())
}

fn print_messages(use_color: Option<bool>, result: &CmdResult) {
    let output = render_messages(&result.messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}
