use std::fmt::{Display, Formatter};

use crate::ValidationError;

/// Longest code the summary endpoint issues (`SPDSPOT` and friends fit easily).
const MAX_CODE_LEN: usize = 12;
/// Separator the `metals=` query uses for multi-metal requests.
const LIST_SEPARATOR: char = ',';

/// Upstream metal code such as `SAEV` (a product) or `SBSPOT` (a spot index).
///
/// Codes are plain ASCII letters and digits, uppercased. A comma-separated
/// list is rejected: every feed call resolves exactly one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let code = input.trim();
        if code.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        if code.contains(LIST_SEPARATOR) {
            return Err(ValidationError::MultipleSymbols {
                value: code.to_owned(),
            });
        }

        if let Some((index, ch)) = code
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_alphanumeric())
        {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        // ASCII only from here, so bytes == chars.
        if code.len() > MAX_CODE_LEN {
            return Err(ValidationError::SymbolTooLong {
                len: code.len(),
                max: MAX_CODE_LEN,
            });
        }

        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Wraps a constant that is already in normalized form.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose comparison against an upstream identifier (trimmed, ASCII case-insensitive).
    pub fn matches(&self, upstream: &str) -> bool {
        upstream.trim().eq_ignore_ascii_case(&self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
