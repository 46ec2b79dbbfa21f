use bullion_core::{has_tokens, resolve_tokens, QuoteFeed, TokenConfig};

use crate::cli::RenderArgs;
use crate::error::CliError;

use super::{read_content, symbol_or, CommandOutput};

pub async fn run(args: &RenderArgs, feed: &QuoteFeed) -> Result<CommandOutput, CliError> {
    let config = token_config(args)?;
    let content = read_content(&args.content)?;

    if !has_tokens(&content) {
        log::debug!("content has no tokens; skipping price fetch");
        return Ok(CommandOutput::Content {
            text: content,
            quote_available: false,
        });
    }

    let quote = if args.offline {
        None
    } else {
        let symbol = symbol_or(args.symbol.as_deref(), &feed.config().product_symbol)?;
        feed.product_quote(&symbol).await
    };

    Ok(CommandOutput::Content {
        text: resolve_tokens(&content, quote.as_ref(), &config),
        quote_available: quote.is_some(),
    })
}

fn token_config(args: &RenderArgs) -> Result<TokenConfig, CliError> {
    let mut config = TokenConfig::default();
    if let Some(band) = args.premium_band {
        config = config.with_premium_band_percent(band);
    }
    if let Some(increment) = args.increment {
        config = config.with_rounding_increment(increment);
    }
    if let Some(fallback) = &args.fallback {
        config = config.with_fallback_phrase(fallback.as_str());
    }

    config.validate()?;
    Ok(config)
}
