//! # numkit
//!
//! Small, stateless integer utilities.
//!
//! This library is organized into several modules:
//! - `utils`: Error handling shared by every component
//! - `encode`: Integer encodings (set-bit positions, Roman numerals)
//! - `analysis`: Frequency analysis over collections of labels
//!
//! ```
//! use numkit::{one_bit_positions, reduce_capacity, romanize};
//!
//! assert_eq!(one_bit_positions(5), vec![2, 1, 3]);
//! assert_eq!(reduce_capacity(["a", "a", "a", "b", "c"]), 1);
//! assert_eq!(romanize(&[1994]), vec!["MCMXCIV"]);
//! ```

// Re-export commonly used types at the crate root
pub use utils::error::{NumkitError, Result};

pub mod utils {
    pub mod error;
}

pub mod encode {
    pub mod bits;
    pub mod roman;

    pub use bits::{one_bit_positions, BitPositions, BitsError};
    pub use roman::{from_roman, romanize, to_roman, RomanEncoder, RomanError};
}

pub mod analysis {
    pub mod coverage;

    pub use coverage::{reduce_capacity, CoverageReport, FrequencyTable};
}

// Public API exports
pub use analysis::coverage::reduce_capacity;
pub use encode::bits::one_bit_positions;
pub use encode::roman::{from_roman, romanize};

/// Set-bit positions of a signed value, rejecting negatives.
pub fn one_bit_positions_signed(n: i64) -> Result<Vec<u32>> {
    Ok(encode::BitPositions::from_signed(n)?.to_vec())
}

/// Encodes `numbers` as standard Roman numerals, rejecting anything outside
/// 1..=3999.
pub fn romanize_strict(numbers: &[u32]) -> Result<Vec<String>> {
    Ok(encode::RomanEncoder::strict().encode_all(numbers)?)
}
