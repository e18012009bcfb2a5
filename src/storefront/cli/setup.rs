use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Viewport width assumed for product pages when `--width` is not given.
pub const DEFAULT_WIDTH: u32 = 1280;

#[derive(Parser, Debug)]
#[command(name = "storefront", bin_name = "storefront", version)]
#[command(
    about = "Browse a product catalog and the attribute selectors of its cards, pages and cart",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON catalog to read (overrides the configured catalog_file)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Viewport width used to pick the product page layout
    #[arg(long, global = true, value_name = "PX", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Log selector activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog cards with their default selections
    #[command(alias = "ls")]
    List {
        /// Category to list ("all" for everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a product page, optionally picking options and adding it to the cart
    View {
        /// Product id
        product_id: String,

        /// Option to pick: Name=Value or an option test id (repeatable)
        #[arg(short, long = "pick", value_name = "PICK")]
        picks: Vec<String>,

        /// Add the product to the cart after applying the picks
        #[arg(long)]
        add: bool,
    },

    /// Fill a cart through product pages and show its lines
    Cart {
        /// Items as <product-id>[:Name=Value,...]
        #[arg(required = true, value_name = "ITEM")]
        items: Vec<String>,
    },

    /// Print the test identifiers of a product's option grid
    Ids {
        /// Product id
        product_id: String,

        /// Use the cart line context instead of the product page
        #[arg(long)]
        cart: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default_category)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
