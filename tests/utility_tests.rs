use numkit::analysis::{CoverageReport, FrequencyTable};
use numkit::encode::roman::{RangePolicy, RomanParams};
use numkit::encode::{BitPositions, RomanEncoder};
use numkit::{NumkitError, from_roman, one_bit_positions, reduce_capacity, romanize};

/// Reference cases for the set-bit counter
#[test]
fn test_bit_positions_reference() {
    assert_eq!(one_bit_positions(0), vec![0]);
    assert_eq!(one_bit_positions(5), vec![2, 1, 3]);
    assert_eq!(one_bit_positions(8), vec![1, 1]);
    assert_eq!(one_bit_positions(161), vec![3, 1, 3, 8]);
}

/// Every component error converts into the crate error
#[test]
fn test_errors_convert_to_crate_error() {
    fn signed(n: i64) -> numkit::Result<u32> {
        Ok(BitPositions::from_signed(n)?.count())
    }

    fn parse(s: &str) -> numkit::Result<u32> {
        Ok(from_roman(s)?)
    }

    assert_eq!(signed(7).unwrap(), 3);
    assert!(matches!(signed(-7), Err(NumkitError::InvalidArg(_))));
    assert_eq!(parse("XIV").unwrap(), 14);
    assert!(matches!(parse("ABC"), Err(NumkitError::Parse(_))));
}

/// Reference cases for the coverage reducer
#[test]
fn test_coverage_reference() {
    assert_eq!(reduce_capacity(Vec::<String>::new()), 0);
    assert_eq!(reduce_capacity(["a", "a", "a", "b", "c"]), 1);

    let models = vec!["m1", "m2", "m3", "m1", "m2", "m4", "m5"];
    let report: CoverageReport = models.iter().collect::<FrequencyTable<_>>().coverage();
    assert_eq!(report.target, 4);
    assert_eq!(report.categories_used, 2);
    assert!(report.covered >= report.target);
}

/// Reference cases for the Roman encoder
#[test]
fn test_roman_reference() {
    assert_eq!(romanize(&[1994]), vec!["MCMXCIV"]);
    assert_eq!(
        romanize(&[1, 4, 9, 40, 90, 400, 900]),
        vec!["I", "IV", "IX", "XL", "XC", "CD", "CM"]
    );

    let strict = RomanEncoder::new(RomanParams {
        range: RangePolicy::Strict,
    });
    assert!(strict.encode_all(&[1994, 0]).is_err());
    assert_eq!(strict.encode_all(&[1994]).unwrap(), vec!["MCMXCIV"]);
}
