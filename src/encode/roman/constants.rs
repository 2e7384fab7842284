// src/encode/roman/constants.rs

//! Symbol table for Roman numeral encoding.

/// Value/symbol pairs from largest to smallest, including the subtractive
/// pairs. The greedy encoder depends on this order.
pub const ROMAN_MAP: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Smallest value with a standard numeral.
pub const MIN_STANDARD: u32 = 1;

/// Largest value with a standard numeral (MMMCMXCIX).
pub const MAX_STANDARD: u32 = 3999;

/// Value of a single numeral character.
#[inline]
pub fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}
