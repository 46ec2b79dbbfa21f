use crate::{PricePreference, QuoteRecord, QuoteSummary};

/// Validate a normalized record and derive change fields.
///
/// Returns `None` when bid, ask and last are all zero. Change is measured
/// from `previous_close` to the preferred current price and is zero whenever
/// there is no positive previous close.
pub fn build_summary(record: QuoteRecord, preference: PricePreference) -> Option<QuoteSummary> {
    if !record.has_price() {
        log::warn!(
            "{} quote carries no bid, ask or last price; treating as unavailable",
            record.symbol
        );
        return None;
    }

    let current_price = current_price(&record, preference);
    let (change, change_percent) = if record.previous_close > 0.0 {
        let change = current_price - record.previous_close;
        (change, change / record.previous_close * 100.0)
    } else {
        (0.0, 0.0)
    };

    let QuoteRecord {
        symbol,
        base_currency,
        last,
        bid,
        ask,
        high,
        low,
        open,
        previous_close,
        timestamp,
    } = record;

    Some(QuoteSummary {
        symbol,
        base_currency,
        last,
        bid,
        ask,
        high,
        low,
        open,
        previous_close,
        timestamp,
        change,
        change_percent,
    })
}

fn current_price(record: &QuoteRecord, preference: PricePreference) -> f64 {
    let (preferred, fallback) = match preference {
        PricePreference::Ask => (record.ask, record.last),
        PricePreference::Last => (record.last, record.ask),
    };

    if preferred != 0.0 {
        preferred
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bid: f64, ask: f64, last: f64, previous_close: f64) -> QuoteRecord {
        QuoteRecord {
            symbol: String::from("SAEV"),
            base_currency: String::from("USD"),
            last,
            bid,
            ask,
            high: 35.2,
            low: 34.6,
            open: 34.9,
            previous_close,
            timestamp: String::from("2025-12-12 17:18:12Z"),
        }
    }

    #[test]
    fn derives_change_from_ask_for_product_quotes() {
        let summary =
            build_summary(record(34.8, 35.0, 0.0, 34.5), PricePreference::Ask).expect("summary");

        assert!((summary.change() - 0.5).abs() < 1e-9);
        assert!((summary.change_percent() - 1.449_275_362).abs() < 1e-6);
    }

    #[test]
    fn derives_change_from_last_for_spot_quotes() {
        let summary =
            build_summary(record(30.9, 31.1, 31.0, 30.0), PricePreference::Last).expect("summary");

        assert!((summary.change() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn falls_back_when_preferred_price_is_zero() {
        let summary =
            build_summary(record(0.0, 0.0, 36.0, 35.0), PricePreference::Ask).expect("summary");

        assert!((summary.change() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_previous_close_means_zero_change() {
        for previous_close in [0.0, -4.0] {
            let summary = build_summary(record(34.8, 35.0, 35.0, previous_close), PricePreference::Ask)
                .expect("summary");
            assert_eq!(summary.change(), 0.0);
            assert_eq!(summary.change_percent(), 0.0);
        }
    }

    #[test]
    fn all_zero_prices_yield_none() {
        assert!(build_summary(record(0.0, 0.0, 0.0, 34.5), PricePreference::Ask).is_none());
        assert!(build_summary(record(0.0, 0.0, 0.0, 34.5), PricePreference::Last).is_none());
    }

    #[test]
    fn copies_record_fields_verbatim() {
        let summary =
            build_summary(record(34.8, 35.0, 34.9, 34.5), PricePreference::Ask).expect("summary");

        assert_eq!(summary.symbol(), "SAEV");
        assert_eq!(summary.base_currency(), "USD");
        assert_eq!(summary.bid(), 34.8);
        assert_eq!(summary.last(), 34.9);
        assert_eq!(summary.high(), 35.2);
        assert_eq!(summary.low(), 34.6);
        assert_eq!(summary.open(), 34.9);
        assert_eq!(summary.timestamp(), "2025-12-12 17:18:12Z");
    }
}
