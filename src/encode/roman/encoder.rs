// src/encode/roman/encoder.rs

use super::constants::{MAX_STANDARD, MIN_STANDARD, ROMAN_MAP};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("Value {0} has no standard Roman numeral (expected 1..=3999)")]
    OutOfRange(u32),
    #[error("Empty numeral")]
    Empty,
    #[error("Unknown numeral symbol {symbol:?} at offset {offset}")]
    UnknownSymbol { symbol: char, offset: usize },
    #[error("Numeral is not in canonical form: {0}")]
    NonCanonical(String),
}

/// What to do with values that have no standard numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Run the greedy loop unbounded: 0 becomes "" and values past 3999
    /// repeat `M`.
    #[default]
    Extended,
    /// Reject anything outside 1..=3999.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RomanParams {
    pub range: RangePolicy,
}

/// Batch Roman numeral encoder.
#[derive(Debug, Clone, Default)]
pub struct RomanEncoder {
    params: RomanParams,
}

impl RomanEncoder {
    pub fn new(params: RomanParams) -> Self {
        Self { params }
    }

    pub fn strict() -> Self {
        Self::new(RomanParams {
            range: RangePolicy::Strict,
        })
    }

    pub fn params(&self) -> &RomanParams {
        &self.params
    }

    /// Encodes a single value under the configured range policy.
    pub fn encode(&self, n: u32) -> Result<String, RomanError> {
        if self.params.range == RangePolicy::Strict && !(MIN_STANDARD..=MAX_STANDARD).contains(&n)
        {
            return Err(RomanError::OutOfRange(n));
        }
        Ok(to_roman(n))
    }

    /// Encodes every value, keeping input order. Fails on the first value the
    /// range policy rejects.
    pub fn encode_all(&self, numbers: &[u32]) -> Result<Vec<String>, RomanError> {
        debug!(
            "Encoding {} values as Roman numerals ({:?})",
            numbers.len(),
            self.params.range
        );

        self.encode_batch(numbers)
    }

    #[cfg(feature = "rayon")]
    fn encode_batch(&self, numbers: &[u32]) -> Result<Vec<String>, RomanError> {
        use rayon::prelude::*;
        numbers.par_iter().map(|&n| self.encode(n)).collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn encode_batch(&self, numbers: &[u32]) -> Result<Vec<String>, RomanError> {
        numbers.iter().map(|&n| self.encode(n)).collect()
    }
}

/// Greedy encoding over [`ROMAN_MAP`]. No range check: 0 gives an empty
/// string and large values repeat `M`.
pub fn to_roman(n: u32) -> String {
    let mut remaining = n;
    let mut roman = String::new();

    for &(value, symbol) in ROMAN_MAP.iter() {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
    }

    #[cfg(feature = "debug-logging")]
    log::trace!("{} -> {}", n, roman);

    roman
}

/// Converts each number to its Roman numeral, one output per input.
pub fn romanize(numbers: &[u32]) -> Vec<String> {
    debug!("Romanizing {} values", numbers.len());
    numbers.iter().map(|&n| to_roman(n)).collect()
}
