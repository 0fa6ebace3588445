//! Alphabet, formatting characters and precision constants.
//!
//! Digit arithmetic is performed on integers. One latitude unit is
//! `1 / LAT_INTEGER_MULTIPLIER` degrees and one longitude unit is
//! `1 / LNG_INTEGER_MULTIPLIER` degrees, which is exactly the cell size of a
//! 15-digit code. Every coarser cell is a whole number of units, so encoding
//! and decoding never accumulate floating-point error across digit levels.

use std::sync::LazyLock;

/// The 20 digit symbols, in value order.
pub const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Number of symbols in the alphabet.
pub const ENCODING_BASE: i64 = 20;

/// Separates the first eight digits from the rest of the code.
pub const SEPARATOR: char = '+';

/// Index of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Fills a full code that has fewer than eight significant digits.
pub const PADDING_CHARACTER: char = '0';

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Maximum number of significant digits a code carries.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Shortest code the encoder produces.
pub const MIN_CODE_LENGTH: usize = 4;

/// Code length used when the caller does not ask for one (~14m x 14m).
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Rows of the refinement grid used after the pair digits.
pub const GRID_ROWS: i64 = 5;

/// Columns of the refinement grid used after the pair digits.
pub const GRID_COLUMNS: i64 = 4;

/// Largest absolute latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Largest absolute longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Highest alphabet index allowed for the first digit of a full code (latitude <= 90).
pub const FIRST_LATITUDE_DIGIT_MAX: u8 = 8;

/// Highest alphabet index allowed for the first longitude digit of a full code (longitude <= 180).
pub const FIRST_LONGITUDE_DIGIT_MAX: u8 = 17;

/// Integer units per degree at the last pair digit (20^3).
const PAIR_PRECISION_UNITS: i64 = 8_000;

/// Integer units per degree of latitude (`8000 * 5^5`).
pub const LAT_INTEGER_MULTIPLIER: i64 = PAIR_PRECISION_UNITS * 3_125;

/// Integer units per degree of longitude (`8000 * 4^5`).
pub const LNG_INTEGER_MULTIPLIER: i64 = PAIR_PRECISION_UNITS * 1_024;

/// Maps an ASCII byte to its digit value. Built once, read-only afterwards.
static DIGIT_VALUES: LazyLock<[Option<u8>; 128]> = LazyLock::new(|| {
    let mut table = [None; 128];
    for (value, &symbol) in (0u8..).zip(ALPHABET.iter()) {
        table[usize::from(symbol)] = Some(value);
        table[usize::from(symbol.to_ascii_lowercase())] = Some(value);
    }
    table
});

/// Returns the value of a digit symbol, or `None` if it is not in the alphabet.
///
/// Lookup is case-insensitive.
#[must_use]
pub fn digit_value(symbol: char) -> Option<u8> {
    let index = usize::try_from(u32::from(symbol)).ok()?;
    let table: &[Option<u8>; 128] = &DIGIT_VALUES;
    table.get(index).copied().flatten()
}

/// Returns the symbol for a digit value in `0..20`.
///
/// Callers derive `value` from clamped unit counts, so it is always in range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn digit_symbol(value: i64) -> char {
    debug_assert!(
        (0..ENCODING_BASE).contains(&value),
        "digit value {value} out of range"
    );
    char::from(ALPHABET[value as usize])
}

/// Number of pair/grid steps needed to reach `code_length` digits, split into
/// `(pairs, grid_digits)`.
#[allow(clippy::cast_possible_truncation)]
const fn steps(code_length: usize) -> (u32, u32) {
    let pair_digits = if code_length < PAIR_CODE_LENGTH {
        code_length
    } else {
        PAIR_CODE_LENGTH
    };
    let grid_digits = if code_length > MAX_DIGIT_COUNT {
        MAX_DIGIT_COUNT - PAIR_CODE_LENGTH
    } else {
        code_length.saturating_sub(PAIR_CODE_LENGTH)
    };
    ((pair_digits / 2) as u32, grid_digits as u32)
}

/// Height of a cell of a `code_length`-digit code, in latitude units.
///
/// Also the place value of the last latitude digit of such a code.
#[must_use]
pub(crate) const fn lat_place_units(code_length: usize) -> i64 {
    let (pairs, grid) = steps(code_length);
    ENCODING_BASE.pow(5 - pairs) * 3_125 / GRID_ROWS.pow(grid)
}

/// Width of a cell of a `code_length`-digit code, in longitude units.
#[must_use]
pub(crate) const fn lng_place_units(code_length: usize) -> i64 {
    let (pairs, grid) = steps(code_length);
    ENCODING_BASE.pow(5 - pairs) * 1_024 / GRID_COLUMNS.pow(grid)
}

/// Returns the height in degrees of a cell of a code with `code_length` digits.
///
/// # Precision Table
///
/// | Length | Height (degrees) | Approximate size |
/// |--------|------------------|------------------|
/// | 2      | 20               | ~2200 km         |
/// | 4      | 1                | ~110 km          |
/// | 6      | 0.05             | ~5.5 km          |
/// | 8      | 0.0025           | ~275 m           |
/// | 10     | 0.000125         | ~14 m            |
/// | 11     | 0.000025         | ~3.5 m           |
///
/// # Examples
///
/// ```
/// use pluscode_core::latitude_precision;
///
/// assert_eq!(latitude_precision(4), 1.0);
/// assert_eq!(latitude_precision(10), 0.000_125);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn latitude_precision(code_length: usize) -> f64 {
    lat_place_units(code_length) as f64 / LAT_INTEGER_MULTIPLIER as f64
}

/// Returns the width in degrees of a cell of a code with `code_length` digits.
///
/// Identical to [`latitude_precision`] up to ten digits; grid digits divide
/// the width by four instead of five.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn longitude_precision(code_length: usize) -> f64 {
    lng_place_units(code_length) as f64 / LNG_INTEGER_MULTIPLIER as f64
}

/// Clamps a latitude into `[-90, 90]`.
#[must_use]
pub(crate) fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wraps a longitude into `[-180, 180)`, whatever multiple of 360 it is off by.
#[must_use]
pub(crate) fn normalize_longitude(longitude: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    let circle = 2.0 * LONGITUDE_MAX;
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(circle) - LONGITUDE_MAX;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= LONGITUDE_MAX {
        wrapped - circle
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_twenty_unique_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 20);
    }

    #[test]
    fn digit_value_is_case_insensitive() {
        assert_eq!(digit_value('2'), Some(0));
        assert_eq!(digit_value('C'), Some(8));
        assert_eq!(digit_value('c'), Some(8));
        assert_eq!(digit_value('J'), Some(12));
        assert_eq!(digit_value('X'), Some(19));
        assert_eq!(digit_value('x'), Some(19));
    }

    #[test]
    fn digit_value_rejects_foreign_symbols() {
        for symbol in ['0', '1', 'A', 'I', 'O', '+', ' ', 'η'] {
            assert_eq!(digit_value(symbol), None, "{symbol} should not decode");
        }
    }

    #[test]
    fn digit_symbol_inverts_digit_value() {
        for value in 0..20 {
            let symbol = digit_symbol(value);
            assert_eq!(digit_value(symbol).map(i64::from), Some(value));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn digit_symbol_rejects_out_of_range_value() {
        let _ = digit_symbol(20);
    }

    #[test]
    fn place_units_for_pairs() {
        assert_eq!(lat_place_units(2), 20 * LAT_INTEGER_MULTIPLIER);
        assert_eq!(lat_place_units(4), LAT_INTEGER_MULTIPLIER);
        assert_eq!(lat_place_units(10), 3_125);
        assert_eq!(lng_place_units(2), 20 * LNG_INTEGER_MULTIPLIER);
        assert_eq!(lng_place_units(10), 1_024);
    }

    #[test]
    fn place_units_for_grid() {
        assert_eq!(lat_place_units(11), 625);
        assert_eq!(lat_place_units(15), 1);
        assert_eq!(lng_place_units(11), 256);
        assert_eq!(lng_place_units(15), 1);
        // Lengths past the maximum stay at the finest cell
        assert_eq!(lat_place_units(20), 1);
    }

    #[test]
    fn precision_in_degrees() {
        assert_eq!(latitude_precision(2), 20.0);
        assert_eq!(latitude_precision(6), 0.05);
        assert_eq!(latitude_precision(8), 0.0025);
        assert_eq!(longitude_precision(10), 0.000_125);
        assert!((latitude_precision(11) - 0.000_025).abs() < 1e-15);
        assert!((longitude_precision(11) - 0.000_031_25).abs() < 1e-15);
    }

    #[test]
    fn clip_latitude_clamps_both_poles() {
        assert_eq!(clip_latitude(91.0), 90.0);
        assert_eq!(clip_latitude(-1000.0), -90.0);
        assert_eq!(clip_latitude(45.5), 45.5);
    }

    #[test]
    fn normalize_longitude_wraps_any_multiple() {
        assert_eq!(normalize_longitude(180.0), -180.0);
        assert_eq!(normalize_longitude(185.0), -175.0);
        assert_eq!(normalize_longitude(-185.0), 175.0);
        assert_eq!(normalize_longitude(725.0), 5.0);
        assert_eq!(normalize_longitude(-1075.0), 5.0);
        assert_eq!(normalize_longitude(-180.0), -180.0);
        assert_eq!(normalize_longitude(12.5), 12.5);
    }
}
