// src/encode/roman/mod.rs

//! Roman numeral encoding and decoding.

pub mod constants;
pub mod decoder;
pub mod encoder;


pub use constants::ROMAN_MAP;
pub use decoder::from_roman;
pub use encoder::{romanize, to_roman, RangePolicy, RomanEncoder, RomanError, RomanParams};
