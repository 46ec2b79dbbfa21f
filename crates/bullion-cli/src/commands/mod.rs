mod capital;
mod product;
mod render;
mod spot;
mod tokens;

use bullion_core::{CapitalRequirementCard, FeedConfig, PriceCard, QuoteFeed, Symbol, TokenKind};

use crate::cli::{Cli, Command, ContentArgs};
use crate::error::CliError;

/// Result of a command, rendered by [`crate::output`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Price(PriceCard),
    Capital(CapitalRequirementCard),
    Content { text: String, quote_available: bool },
    Tokens(Vec<TokenKind>),
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    match &cli.command {
        Command::Product(args) => product::run(args, &feed(cli)?).await,
        Command::Spot(args) => spot::run(args, &feed(cli)?).await,
        Command::Capital(args) => capital::run(args, &feed(cli)?).await,
        Command::Render(args) => render::run(args, &feed(cli)?).await,
        Command::Tokens(args) => tokens::run(args),
    }
}

/// Reqwest-backed feed for the commands that fetch a price.
fn feed(cli: &Cli) -> Result<QuoteFeed, CliError> {
    let config = feed_config(cli, FeedConfig::from_env()?)?;
    log::debug!(
        "feed configured: api_base={} product={} spot={}",
        config.api_base,
        config.product_symbol,
        config.spot_symbol
    );
    Ok(QuoteFeed::with_reqwest(config))
}

/// Apply global CLI overrides on top of the environment-derived config.
fn feed_config(cli: &Cli, base: FeedConfig) -> Result<FeedConfig, CliError> {
    let mut config = base;
    if let Some(api_base) = &cli.api_base {
        config = config.with_api_base(api_base.as_str())?;
    }
    if cli.timeout_ms.is_some() {
        config = config.with_timeout_ms(cli.timeout_ms);
    }
    Ok(config)
}

fn symbol_or(raw: Option<&str>, configured: &Symbol) -> Result<Symbol, CliError> {
    match raw {
        Some(raw) => Ok(Symbol::parse(raw)?),
        None => Ok(configured.clone()),
    }
}

fn read_content(args: &ContentArgs) -> Result<String, CliError> {
    match (&args.text, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(CliError::Command(String::from(
            "provide content as TEXT or --file PATH",
        ))),
    }
}
