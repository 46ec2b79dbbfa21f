use bullion_core::{CapitalRequirementCard, QuoteFeed};

use crate::cli::SymbolArgs;
use crate::error::CliError;

use super::{symbol_or, CommandOutput};

/// Capital card priced from the product ask.
pub async fn run(args: &SymbolArgs, feed: &QuoteFeed) -> Result<CommandOutput, CliError> {
    let symbol = symbol_or(args.symbol.as_deref(), &feed.config().product_symbol)?;
    let quote = feed.product_quote(&symbol).await;

    Ok(CommandOutput::Capital(CapitalRequirementCard::new(
        quote.as_ref(),
        &symbol,
    )))
}
