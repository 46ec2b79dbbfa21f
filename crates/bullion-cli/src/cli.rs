//! CLI argument definitions for Bullion.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `product` | Product price card (ask-based) |
//! | `spot` | Spot index card (last-based) |
//! | `capital` | Approximate capital for a single unit |
//! | `render` | Resolve `{{TOKEN}}` placeholders in content |
//! | `tokens` | List placeholders found in content |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--api-base` | `BULLION_API_BASE` or Monex summary URL | Upstream endpoint |
//! | `--timeout-ms` | `BULLION_TIMEOUT_MS` or transport default | Request timeout |
//!
//! # Examples
//!
//! ```bash
//! bullion product
//! bullion spot SGSPOT --format json --pretty
//! bullion render "A coin costs about {{CAPITAL_REQUIREMENT}}."
//! bullion tokens --file content/faq.md
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// Bullion - live precious-metals pricing for content
#[derive(Debug, Parser)]
#[command(
    name = "bullion",
    author,
    version,
    about = "Live precious-metals price cards and content tokens",
    long_about = "Bullion fetches a single quote per command from a market-data summary \
endpoint, tolerating several payload shapes, and renders price cards or resolves \
{{TOKEN}} placeholders in prose.\n\
\n\
An unavailable price is not an error: cards render their unavailable branch and \
tokens fall back to neutral phrasing.\n\
\n\
Use 'bullion <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Summary endpoint; the symbol is appended as `?metals=SYMBOL`.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Product price card headlined by the ask.
    ///
    /// # Examples
    ///
    ///   bullion product
    ///   bullion product SAEV --format json
    Product(SymbolArgs),

    /// Spot index card headlined by the last trade.
    ///
    /// # Examples
    ///
    ///   bullion spot
    ///   bullion spot SGSPOT
    Spot(SymbolArgs),

    /// Approximate capital needed for a single unit of the product.
    Capital(SymbolArgs),

    /// Resolve content tokens against one product fetch.
    ///
    /// # Examples
    ///
    ///   bullion render "Coins start near {{CAPITAL_REQUIREMENT}}."
    ///   bullion render --file faq.md --increment 5
    ///   bullion render --file faq.md --offline
    Render(RenderArgs),

    /// List content tokens without fetching any price.
    Tokens(ContentArgs),
}

/// Symbol override for card commands.
#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Market symbol; defaults to the configured product or spot symbol.
    pub symbol: Option<String>,
}

/// Content given inline or read from a file.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("content").required(true).args(["text", "file"])))]
pub struct ContentArgs {
    /// Inline content.
    pub text: Option<String>,

    /// Read content from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Skip the fetch and render fallback phrasing.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Product symbol the tokens are priced from.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Spread around the ask used by range tokens, in percent.
    #[arg(long)]
    pub premium_band: Option<f64>,

    /// Dollar increment displayed values are rounded to.
    #[arg(long)]
    pub increment: Option<f64>,

    /// Phrase used when no price is available.
    #[arg(long)]
    pub fallback: Option<String>,
}
