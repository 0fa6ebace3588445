//! Code to area decoding.

use super::alphabet::{
    digit_value, lat_place_units, lng_place_units, GRID_COLUMNS, LAT_INTEGER_MULTIPLIER,
    LNG_INTEGER_MULTIPLIER, MAX_DIGIT_COUNT, PAIR_CODE_LENGTH,
};
use super::code::PlusCode;
use super::error::{CodeError, Result};
use super::types::{CodeArea, Point};

/// Latitude offset of the south pole, in integer units.
const SOUTH_POLE_UNITS: i64 = 90 * LAT_INTEGER_MULTIPLIER;

/// Longitude offset of the antimeridian, in integer units.
const ANTIMERIDIAN_UNITS: i64 = 180 * LNG_INTEGER_MULTIPLIER;

/// Decodes a full code into the area it covers.
///
/// Digits beyond the fifteenth are ignored.
///
/// # Errors
///
/// - [`CodeError::InvalidCode`] if `code` is not a valid code
/// - [`CodeError::NotFullCode`] if `code` is a short code
///
/// # Examples
///
/// ```
/// use pluscode_core::decode;
///
/// let area = decode("7FG49QCJ+2V").unwrap();
/// assert_eq!(area.south(), 20.37);
/// assert_eq!(area.west(), 2.782_125);
/// assert_eq!(area.code_length(), 10);
/// ```
pub fn decode(code: &str) -> Result<CodeArea> {
    PlusCode::parse(code)?.decode()
}

impl PlusCode {
    /// Decodes this code into the area it covers.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::NotFullCode`] if this is a short code.
    pub fn decode(&self) -> Result<CodeArea> {
        if !self.is_full() {
            return Err(CodeError::NotFullCode(self.to_string()));
        }

        let mut lat_val: i64 = 0;
        let mut lng_val: i64 = 0;
        let mut digit_count = 0;
        for (position, symbol) in self.code_digits().chars().take(MAX_DIGIT_COUNT).enumerate() {
            let value = digit_value(symbol)
                .map(i64::from)
                .ok_or_else(|| CodeError::InvalidCode(self.to_string()))?;
            if position < PAIR_CODE_LENGTH {
                let pair_length = position / 2 * 2 + 2;
                if position % 2 == 0 {
                    lat_val += value * lat_place_units(pair_length);
                } else {
                    lng_val += value * lng_place_units(pair_length);
                }
            } else {
                lat_val += value / GRID_COLUMNS * lat_place_units(position + 1);
                lng_val += value % GRID_COLUMNS * lng_place_units(position + 1);
            }
            digit_count = position + 1;
        }

        let south = to_degrees(lat_val - SOUTH_POLE_UNITS, LAT_INTEGER_MULTIPLIER);
        let west = to_degrees(lng_val - ANTIMERIDIAN_UNITS, LNG_INTEGER_MULTIPLIER);
        let north = to_degrees(
            lat_val + lat_place_units(digit_count) - SOUTH_POLE_UNITS,
            LAT_INTEGER_MULTIPLIER,
        );
        let east = to_degrees(
            lng_val + lng_place_units(digit_count) - ANTIMERIDIAN_UNITS,
            LNG_INTEGER_MULTIPLIER,
        );

        CodeArea::new(
            Point::new(south, west)?,
            Point::new(north, east)?,
            digit_count,
        )
    }

    /// Returns true if this full code's area contains `point`.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::NotFullCode`] if this is a short code.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.decode()?.contains(point))
    }
}

/// Converts a signed unit offset back to degrees with a single rounding.
#[allow(clippy::cast_precision_loss)]
fn to_degrees(units: i64, multiplier: i64) -> f64 {
    units as f64 / multiplier as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_area(code: &str, south: f64, west: f64, north: f64, east: f64) {
        let area = decode(code).unwrap();
        let eps = 1e-10;
        assert!((area.south() - south).abs() < eps, "{code} south {}", area.south());
        assert!((area.west() - west).abs() < eps, "{code} west {}", area.west());
        assert!((area.north() - north).abs() < eps, "{code} north {}", area.north());
        assert!((area.east() - east).abs() < eps, "{code} east {}", area.east());
    }

    #[test]
    fn decodes_pair_code() {
        assert_area("7FG49QCJ+2V", 20.37, 2.782_125, 20.370_125, 2.782_25);
        assert_area("8FVC2222+22", 47.0, 8.0, 47.000_125, 8.000_125);
        assert_area("4VCPPQGP+Q9", -41.273_125, 174.785_875, -41.273, 174.786);
    }

    #[test]
    fn decodes_grid_code() {
        assert_area("7FG49QCJ+2VX", 20.370_1, 2.782_218_75, 20.370_125, 2.782_25);
        assert_area("6FH32222+222", 1.0, 1.0, 1.000_025, 1.000_031_25);
    }

    #[test]
    fn decodes_padded_code() {
        assert_area("7FG49Q00+", 20.35, 2.75, 20.4, 2.8);
        assert_area("7FG40000+", 20.0, 2.0, 21.0, 3.0);
        assert_area("22220000+", -90.0, -180.0, -89.0, -179.0);
        assert_area("CFX30000+", 89.0, 1.0, 90.0, 2.0);
    }

    #[test]
    fn decodes_extreme_corners() {
        assert_area("22222222+22", -90.0, -180.0, -89.999_875, -179.999_875);
        assert_area("CVXXXXXX+XX", 89.999_875, 179.999_875, 90.0, 180.0);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("7fg49qcj+2v").unwrap(), decode("7FG49QCJ+2V").unwrap());
    }

    #[test]
    fn decode_reports_code_length() {
        assert_eq!(decode("7FG49Q00+").unwrap().code_length(), 6);
        assert_eq!(decode("7FG49QCJ+2VX").unwrap().code_length(), 11);
    }

    #[test]
    fn decode_ignores_digits_past_fifteen() {
        let capped = decode("7FG49QCJ+2VXGJQX").unwrap();
        let longer = decode("7FG49QCJ+2VXGJQXX").unwrap();
        let longest = decode("7FG49QCJ+2VXGJQX2345").unwrap();
        assert_eq!(capped.code_length(), 15);
        assert_eq!(capped, longer);
        assert_eq!(capped, longest);
    }

    #[test]
    fn decode_rejects_short_codes() {
        assert!(matches!(decode("+2VX"), Err(CodeError::NotFullCode(_))));
        assert!(matches!(decode("WC2345+G6"), Err(CodeError::NotFullCode(_))));
    }

    #[test]
    fn decode_rejects_invalid_codes() {
        assert!(matches!(decode(""), Err(CodeError::InvalidCode(_))));
        assert!(matches!(decode("8FWC2300+G6"), Err(CodeError::InvalidCode(_))));
    }

    #[test]
    fn contains_checks_the_decoded_area() {
        let code: PlusCode = "7FG49QCJ+2V".parse().unwrap();
        assert!(code.contains(&Point::new(20.370_06, 2.782_2).unwrap()).unwrap());
        assert!(!code.contains(&Point::new(20.370_125, 2.782_2).unwrap()).unwrap());
    }
}
