use std::io::Write;

use bullion_core::{CapitalRequirementCard, PriceCard, PriceCardBody, TokenKind};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

const LABEL_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentData<'a> {
    text: &'a str,
    quote_available: bool,
}

#[derive(Debug, Serialize)]
struct TokensData<'a> {
    tokens: &'a [TokenKind],
    count: usize,
}

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let rendered = match format {
        OutputFormat::Json => to_json(output, pretty)?,
        OutputFormat::Table => to_table(output),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}

fn to_json(output: &CommandOutput, pretty: bool) -> Result<String, serde_json::Error> {
    let value = match output {
        CommandOutput::Price(card) => serde_json::to_value(card)?,
        CommandOutput::Capital(card) => serde_json::to_value(card)?,
        CommandOutput::Content {
            text,
            quote_available,
        } => serde_json::to_value(ContentData {
            text,
            quote_available: *quote_available,
        })?,
        CommandOutput::Tokens(tokens) => serde_json::to_value(TokensData {
            tokens,
            count: tokens.len(),
        })?,
    };

    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

fn to_table(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Price(PriceCard::Available(body)) => price_table(body),
        CommandOutput::Price(PriceCard::Unavailable { message }) => message.clone(),
        CommandOutput::Capital(card) => capital_table(card),
        CommandOutput::Content { text, .. } => text.clone(),
        CommandOutput::Tokens(tokens) if tokens.is_empty() => String::from("no tokens found"),
        CommandOutput::Tokens(tokens) => tokens
            .iter()
            .map(|kind| kind.placeholder())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn price_table(body: &PriceCardBody) -> String {
    let mut lines = vec![body.title.clone(), body.subtitle.clone(), String::new()];
    lines.push(row(
        &body.headline_label,
        &format!("{} {}", body.headline, body.unit_label),
    ));
    lines.push(row("Change", &body.change));
    if let Some(bid_ask) = &body.bid_ask {
        lines.push(row("Bid", &bid_ask.bid));
        lines.push(row("Ask", &bid_ask.ask));
    }
    lines.push(row("Open", &body.stats.open));
    lines.push(row("High", &body.stats.high));
    lines.push(row("Low", &body.stats.low));
    lines.push(row("Previous Close", &body.stats.previous_close));
    lines.push(row("As of", &body.as_of));
    lines.join("\n")
}

fn capital_table(card: &CapitalRequirementCard) -> String {
    match card {
        CapitalRequirementCard::Available {
            caption,
            amount,
            footnote,
        } => format!("{caption}\n{amount}\n{footnote}"),
        CapitalRequirementCard::Unavailable {
            caption,
            message,
            hint,
        } => format!("{caption}\n{message}\n{hint}"),
    }
}

fn row(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value}")
}
