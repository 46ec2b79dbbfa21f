use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

const DATE_TIME_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_MINUTES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const OFFSET_EXTENDED: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");
const OFFSET_BASIC: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory][offset_minute]");
const MEDIUM_DATE_SHORT_TIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
);

/// Zone designators that mean UTC.
const UTC_SUFFIXES: [&str; 6] = ["Z", "z", " UTC", "UTC", " GMT", "GMT"];
/// `YYYY-MM-DD`; numeric offsets are only looked for past the date.
const DATE_LEN: usize = 10;

/// Instant normalized to UTC.
///
/// Upstream feeds send timestamps in loosely ISO-8601 shapes
/// (`2025-12-12 17:18:12Z`, `2025-12-12T17:18:12.120+0000`,
/// `2025-12-12 17:18:12 GMT`, plain dates). [`UtcDateTime::parse_lenient`]
/// accepts all of them; values without an offset are taken as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Strict RFC3339 parse; any offset is converted to UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        OffsetDateTime::parse(input.trim(), &Rfc3339)
            .map(Self::from_offset_datetime)
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            })
    }

    pub fn parse_lenient(input: &str) -> Result<Self, ValidationError> {
        if let Ok(parsed) = Self::parse(input) {
            return Ok(parsed);
        }

        let (local, offset) = split_offset(input);
        let normalized = normalize_local(local);
        let naive = PrimitiveDateTime::parse(&normalized, DATE_TIME_SECONDS)
            .or_else(|_| PrimitiveDateTime::parse(&normalized, DATE_TIME_MINUTES))
            .or_else(|_| Date::parse(&normalized, DATE_ONLY).map(Date::midnight))
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            })?;

        Ok(Self::from_offset_datetime(naive.assume_offset(offset)))
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.to_string())
    }

    /// Medium date, short time (`Dec 12, 2025, 5:18 PM`) at the given offset.
    pub fn format_medium(self, offset: UtcOffset) -> Option<String> {
        self.0
            .to_offset(offset)
            .format(MEDIUM_DATE_SHORT_TIME)
            .ok()
    }
}

/// Splits a trailing zone off `input`: a UTC designator, `±HH:MM` or `±HHMM`.
/// Anything else is left in place and read as UTC.
fn split_offset(input: &str) -> (&str, UtcOffset) {
    let value = input.trim();

    for suffix in UTC_SUFFIXES {
        if let Some(local) = value.strip_suffix(suffix) {
            return (local.trim_end(), UtcOffset::UTC);
        }
    }

    for (width, format) in [(6, OFFSET_EXTENDED), (5, OFFSET_BASIC)] {
        let Some(split) = value.len().checked_sub(width) else {
            continue;
        };
        if split <= DATE_LEN || !value.is_char_boundary(split) {
            continue;
        }

        let (local, zone) = value.split_at(split);
        if !zone.starts_with(['+', '-']) {
            continue;
        }
        if let Ok(offset) = UtcOffset::parse(zone, format) {
            return (local.trim_end(), offset);
        }
    }

    (value, UtcOffset::UTC)
}

/// Drops fractional seconds and the `T` separator so the remainder can be
/// matched against the naive formats.
fn normalize_local(value: &str) -> String {
    let mut normalized = if value.len() > DATE_LEN && value.as_bytes()[DATE_LEN] == b'T' {
        format!("{} {}", &value[..DATE_LEN], &value[DATE_LEN + 1..])
    } else {
        value.to_owned()
    };

    if let Some(dot) = normalized.rfind('.') {
        if dot > DATE_LEN {
            normalized.truncate(dot);
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_converts_to_utc() {
        let parsed = UtcDateTime::parse("2024-01-01T01:00:00+01:00").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn parses_space_separated_upstream_timestamp() {
        let parsed = UtcDateTime::parse_lenient("2025-12-12 17:18:12Z").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2025-12-12T17:18:12Z");
    }

    #[test]
    fn parses_naive_timestamp_with_fraction_as_utc() {
        let parsed =
            UtcDateTime::parse_lenient("2025-12-12T17:18:12.345").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2025-12-12T17:18:12Z");
    }

    #[test]
    fn parses_basic_offsets_and_gmt_designator() {
        for input in [
            "2025-12-12T17:18:12+0000",
            "2025-12-12 17:18:12 GMT",
            "2025-12-12 17:18:12GMT",
            "2025-12-12T12:18:12.500-0500",
            "2025-12-12 19:18:12 +02:00",
        ] {
            let parsed = UtcDateTime::parse_lenient(input).expect("must parse");
            assert_eq!(parsed.format_rfc3339(), "2025-12-12T17:18:12Z", "{input}");
        }
    }

    #[test]
    fn short_values_are_not_mistaken_for_offsets() {
        let parsed = UtcDateTime::parse_lenient("2025-12-12 17:18").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2025-12-12T17:18:00Z");
        assert!(UtcDateTime::parse_lenient("2025-12-12 17:18:12+9999").is_err());
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let parsed = UtcDateTime::parse_lenient("2025-03-01").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2025-03-01T00:00:00Z");
    }

    #[test]
    fn rejects_garbage() {
        let err = UtcDateTime::parse_lenient("yesterday-ish").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn formats_medium_date_short_time() {
        let parsed = UtcDateTime::parse_lenient("2025-12-12 17:18:12Z").expect("must parse");
        assert_eq!(
            parsed.format_medium(UtcOffset::UTC).as_deref(),
            Some("Dec 12, 2025, 5:18 PM")
        );
    }
}
