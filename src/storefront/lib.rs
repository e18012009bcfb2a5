//! # Storefront Architecture
//!
//! Storefront is a **UI-agnostic library** for the attribute-selection part of a shop front:
//! the option grid shown on catalog cards, product pages and cart lines, the stable test
//! identifiers those grids expose, and the hosts that own the selection in each context.
//! The `storefront` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, terminal I/O        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session cart         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Mounts hosts, applies picks, returns CmdResult views     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Hosts (hosts/) over the Attribute Selector (selector.rs)   │
//! │  - Catalog card, product page, cart line item               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait: FileCatalog, InMemoryCatalog         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Test Identifiers
//!
//! Every attribute container and option carries a deterministic identifier used by
//! automated UI tests, e.g. `product-attribute-capacity-512gb-selected`. The derivation
//! lives in [`testid`] and is versioned by [`testid::TEST_ID_CONTRACT_VERSION`].
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process. Selector
//! activity is reported through the [`observe::SelectorObserver`] hook, which the binary
//! wires to `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: list, view, cart, ids and config
//! - [`hosts`]: Catalog card, product detail page, cart and cart line item
//! - [`selector`]: The attribute selector state machine and its view
//! - [`testid`]: Test identifier derivation
//! - [`model`]: Products, attribute definitions and selection maps
//! - [`store`]: Catalog abstraction and implementations
//! - [`layout`]: Viewport and scoped resize listeners
//! - [`abbrev`]: Size label abbreviation
//! - [`observe`]: Selector event hook
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod abbrev;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod hosts;
pub mod layout;
pub mod model;
pub mod observe;
pub mod selector;
pub mod store;
pub mod testid;
