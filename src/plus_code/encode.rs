//! Coordinate to code encoding.

use super::alphabet::{
    clip_latitude, digit_symbol, lat_place_units, latitude_precision, lng_place_units,
    normalize_longitude, GRID_COLUMNS, LATITUDE_MAX, LAT_INTEGER_MULTIPLIER, LNG_INTEGER_MULTIPLIER,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, MIN_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR, SEPARATOR_POSITION,
};
use super::code::PlusCode;
use super::error::{CodeError, Result};

/// Latitude units from the south pole to the north pole.
const LAT_SPAN_UNITS: i64 = 180 * LAT_INTEGER_MULTIPLIER;

/// Longitude units once around the globe.
const LNG_SPAN_UNITS: i64 = 360 * LNG_INTEGER_MULTIPLIER;

/// Encodes a location into a code of `code_length` significant digits.
///
/// Latitude is clamped to `[-90, 90]` and longitude wrapped into
/// `[-180, 180)`. Lengths above 15 are clamped to 15. Codes shorter than
/// eight digits are padded with `0` up to the separator.
///
/// # Precision
///
/// | Length | Cell size          |
/// |--------|--------------------|
/// | 4      | 1° x 1°            |
/// | 6      | 0.05° x 0.05°      |
/// | 8      | 0.0025° x 0.0025°  |
/// | 10     | ~14m x 14m         |
/// | 11     | ~3.5m x 2.8m       |
///
/// # Errors
///
/// - [`CodeError::InvalidLength`] if `code_length` is below 4, or odd and below 10
/// - [`CodeError::OutOfRange`] if either coordinate is NaN or infinite
///
/// # Examples
///
/// ```
/// use pluscode_core::encode;
///
/// assert_eq!(encode(20.375, 2.775, 6).unwrap(), "7FG49Q00+");
/// assert_eq!(encode(47.000_062_5, 8.000_062_5, 10).unwrap(), "8FVC2222+22");
/// assert!(encode(20.375, 2.775, 7).is_err());
/// ```
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<PlusCode> {
    if code_length < MIN_CODE_LENGTH || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(CodeError::InvalidLength(code_length));
    }
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(CodeError::OutOfRange {
            latitude,
            longitude,
        });
    }
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let mut latitude = clip_latitude(latitude);
    // The pole itself would fall outside every cell, so move it into the topmost one
    if latitude >= LATITUDE_MAX {
        latitude -= 0.9 * latitude_precision(code_length);
    }
    let longitude = normalize_longitude(longitude);

    // Rounding can carry a value just below the pole or the antimeridian onto it
    let mut lat_val =
        to_units(latitude + LATITUDE_MAX, LAT_INTEGER_MULTIPLIER).clamp(0, LAT_SPAN_UNITS - 1);
    let mut lng_val =
        to_units(longitude + LONGITUDE_MAX, LNG_INTEGER_MULTIPLIER).rem_euclid(LNG_SPAN_UNITS);

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    for position in 0..code_length {
        let value = if position < PAIR_CODE_LENGTH {
            // Both digits of a pair share the place value of the pair's last digit
            let pair_length = position / 2 * 2 + 2;
            if position % 2 == 0 {
                take_digit(&mut lat_val, lat_place_units(pair_length))
            } else {
                take_digit(&mut lng_val, lng_place_units(pair_length))
            }
        } else {
            let row = take_digit(&mut lat_val, lat_place_units(position + 1));
            let column = take_digit(&mut lng_val, lng_place_units(position + 1));
            row * GRID_COLUMNS + column
        };
        code.push(digit_symbol(value));
        if position + 1 == SEPARATOR_POSITION {
            code.push(SEPARATOR);
        }
    }

    let padded = code_length < SEPARATOR_POSITION;
    if padded {
        for _ in code_length..SEPARATOR_POSITION {
            code.push(PADDING_CHARACTER);
        }
        code.push(SEPARATOR);
    }

    Ok(PlusCode::from_encoded(
        code,
        SEPARATOR_POSITION,
        code_length,
        padded,
    ))
}

/// Converts a non-negative degree offset to integer units.
///
/// The scaled value is rounded to six decimals before flooring so that a
/// decimal input sitting exactly on a cell edge is not pushed into the
/// neighbouring cell by its binary representation.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn to_units(degrees: f64, multiplier: i64) -> i64 {
    let scaled = degrees * multiplier as f64;
    ((scaled * 1e6).round() / 1e6).floor() as i64
}

/// Splits off the leading digit of `value` at `place`, leaving the remainder.
fn take_digit(value: &mut i64, place: i64) -> i64 {
    let digit = *value / place;
    *value %= place;
    digit
}
