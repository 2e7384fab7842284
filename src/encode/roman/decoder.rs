// src/encode/roman/decoder.rs

use super::constants::symbol_value;
use super::encoder::{to_roman, RomanError};

/// Parses a canonical Roman numeral.
///
/// Symbols are summed left to right, subtracting any symbol smaller than its
/// right neighbour. The result is then re-encoded and compared with the
/// input, which rejects forms like `IIII`, `IC` or `VV`.
pub fn from_roman(numeral: &str) -> Result<u32, RomanError> {
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }

    let values = numeral
        .chars()
        .enumerate()
        .map(|(offset, symbol)| {
            symbol_value(symbol).ok_or(RomanError::UnknownSymbol { symbol, offset })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if v < next => total -= v as i64,
            _ => total += v as i64,
        }
    }

    let value = u32::try_from(total).map_err(|_| RomanError::NonCanonical(numeral.to_string()))?;
    if value == 0 || to_roman(value) != numeral {
        return Err(RomanError::NonCanonical(numeral.to_string()));
    }

    Ok(value)
}
