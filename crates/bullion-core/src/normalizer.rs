//! Shape normalizer for loosely specified quote payloads.
//!
//! The upstream summary endpoint has been observed returning a bare array, a
//! map keyed by symbol, a flat record, and both of the first two wrapped in a
//! `data` property. [`locate_record`] walks an ordered chain of shape
//! strategies and stops at the first one that yields a record;
//! [`extract_record`] then reads each field through a list of key aliases.

use serde_json::{Map, Value};

use crate::{QuoteRecord, Symbol, UtcDateTime};

type JsonObject = Map<String, Value>;
type ShapeStrategy = for<'a> fn(&'a Value, &Symbol) -> Option<&'a JsonObject>;

/// Shape strategies in priority order.
const SHAPE_STRATEGIES: [(&str, ShapeStrategy); 7] = [
    ("array", from_array),
    ("keyed_by_symbol", from_symbol_key),
    ("data_array", from_data_array),
    ("data_object", from_data_object),
    ("self_identified", from_self_identified),
    ("direct_prices", from_direct_prices),
    ("nested_prices", from_nested_prices),
];

const IDENTITY_KEYS: [&str; 2] = ["symbol", "metal"];
const PRICE_KEYS: [&str; 3] = ["bid", "ask", "last"];

const LAST_KEYS: &[&str] = &["last", "Last", "price"];
const BID_KEYS: &[&str] = &["bid", "Bid", "bidPrice"];
const ASK_KEYS: &[&str] = &["ask", "Ask", "askPrice"];
const HIGH_KEYS: &[&str] = &["high", "High", "dayHigh"];
const LOW_KEYS: &[&str] = &["low", "Low", "dayLow"];
const OPEN_KEYS: &[&str] = &["open", "Open", "dayOpen"];
const PREVIOUS_CLOSE_KEYS: &[&str] = &["previousClose", "PreviousClose", "close", "Close"];
const SYMBOL_KEYS: &[&str] = &["symbol", "Symbol", "metal"];
const CURRENCY_KEYS: &[&str] = &["baseCurrency", "BaseCurrency", "currency"];
const TIMESTAMP_KEYS: &[&str] = &["timestamp", "Timestamp", "lastUpdate", "updatedAt"];

const DEFAULT_CURRENCY: &str = "USD";

/// Locate and extract the record for `symbol`, or `None` on a shape failure.
pub fn normalize(payload: &Value, symbol: &Symbol) -> Option<QuoteRecord> {
    match locate_record(payload, symbol) {
        Some(record) => Some(extract_record(record, symbol)),
        None => {
            log::warn!("could not locate a {symbol} record in the upstream payload");
            None
        }
    }
}

pub fn locate_record<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    SHAPE_STRATEGIES.iter().find_map(|(name, strategy)| {
        let record = strategy(payload, symbol)?;
        log::debug!("{symbol} record located via {name} shape");
        Some(record)
    })
}

pub fn extract_record(record: &JsonObject, symbol: &Symbol) -> QuoteRecord {
    let last = number_at(record, LAST_KEYS).unwrap_or(0.0);

    QuoteRecord {
        symbol: text_at(record, SYMBOL_KEYS).unwrap_or_else(|| symbol.as_str().to_owned()),
        base_currency: text_at(record, CURRENCY_KEYS)
            .unwrap_or_else(|| String::from(DEFAULT_CURRENCY)),
        last,
        bid: number_at(record, BID_KEYS).unwrap_or(0.0),
        ask: number_at(record, ASK_KEYS).unwrap_or(last),
        high: number_at(record, HIGH_KEYS).unwrap_or(0.0),
        low: number_at(record, LOW_KEYS).unwrap_or(0.0),
        open: number_at(record, OPEN_KEYS).unwrap_or(0.0),
        previous_close: number_at(record, PREVIOUS_CLOSE_KEYS).unwrap_or(0.0),
        timestamp: text_at(record, TIMESTAMP_KEYS)
            .unwrap_or_else(|| UtcDateTime::now().format_rfc3339()),
    }
}

fn from_array<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    search_records(payload.as_array()?, symbol)
}

fn from_symbol_key<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    keyed_entry(payload.as_object()?, symbol)
}

fn from_data_array<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    search_records(payload.get("data")?.as_array()?, symbol)
}

fn from_data_object<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    let data = payload.get("data")?.as_object()?;
    keyed_entry(data, symbol).or(Some(data))
}

fn from_self_identified<'a>(payload: &'a Value, symbol: &Symbol) -> Option<&'a JsonObject> {
    payload
        .as_object()
        .filter(|record| identifies(record, symbol))
}

fn from_direct_prices<'a>(payload: &'a Value, _symbol: &Symbol) -> Option<&'a JsonObject> {
    payload.as_object().filter(|record| exposes_prices(record))
}

fn from_nested_prices<'a>(payload: &'a Value, _symbol: &Symbol) -> Option<&'a JsonObject> {
    payload
        .as_object()?
        .values()
        .filter_map(Value::as_object)
        .find(|record| exposes_prices(record))
}

/// Matching element, else the first element when it is an object.
fn search_records<'a>(items: &'a [Value], symbol: &Symbol) -> Option<&'a JsonObject> {
    items
        .iter()
        .filter_map(Value::as_object)
        .find(|record| identifies(record, symbol))
        .or_else(|| items.first().and_then(Value::as_object))
}

fn keyed_entry<'a>(object: &'a JsonObject, symbol: &Symbol) -> Option<&'a JsonObject> {
    object
        .get(symbol.as_str())
        .and_then(Value::as_object)
        .or_else(|| {
            object
                .iter()
                .find(|(key, _)| symbol.matches(key))
                .and_then(|(_, value)| value.as_object())
        })
}

fn identifies(record: &JsonObject, symbol: &Symbol) -> bool {
    IDENTITY_KEYS.iter().any(|key| {
        record
            .get(*key)
            .and_then(Value::as_str)
            .is_some_and(|value| symbol.matches(value))
    })
}

fn exposes_prices(record: &JsonObject) -> bool {
    PRICE_KEYS.iter().any(|key| record.contains_key(*key))
}

/// First alias holding a non-null value, coerced to a number.
fn number_at(record: &JsonObject, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
        .map(coerce_number)
}

fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };

    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// First alias holding a non-empty, non-zero scalar, rendered as text.
fn text_at(record: &JsonObject, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(truthy_text))
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        Value::Bool(true) => Some(String::from("true")),
        _ => None,
    }
}
