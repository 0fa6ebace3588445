//! Recovering full codes from short codes and a reference location.

use log::{debug, trace};

use super::alphabet::{
    clip_latitude, latitude_precision, normalize_longitude, LATITUDE_MAX, LONGITUDE_MAX,
    PAIR_CODE_LENGTH, SEPARATOR_POSITION,
};
use super::code::PlusCode;
use super::encode::encode;
use super::error::{CodeError, Result};

/// Recovers the full code nearest to the reference location that ends with
/// the given short code.
///
/// # Errors
///
/// - [`CodeError::InvalidCode`] if `short_code` is not a valid code
/// - [`CodeError::NotShortCode`] if it is a full code
/// - [`CodeError::OutOfRange`] if the reference is NaN or infinite
///
/// # Examples
///
/// ```
/// use pluscode_core::recover_nearest;
///
/// let full = recover_nearest("9QCJ+2VX", 51.3, -1.2).unwrap();
/// assert_eq!(full, "9C3W9QCJ+2VX");
///
/// // Near the pole the nearest match never crosses 90 degrees
/// let full = recover_nearest("2222+22", 89.6, 0.0).unwrap();
/// assert_eq!(full, "CFX22222+22");
/// ```
pub fn recover_nearest(short_code: &str, latitude: f64, longitude: f64) -> Result<PlusCode> {
    PlusCode::parse(short_code)?.recover_nearest(latitude, longitude)
}

impl PlusCode {
    /// Recovers the full code nearest to the reference location.
    ///
    /// See [`recover_nearest`].
    ///
    /// # Errors
    ///
    /// Same as [`recover_nearest`], minus the parsing failure.
    pub fn recover_nearest(&self, latitude: f64, longitude: f64) -> Result<Self> {
        if !self.is_short() {
            return Err(CodeError::NotShortCode(self.to_string()));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CodeError::OutOfRange {
                latitude,
                longitude,
            });
        }
        let reference_lat = clip_latitude(latitude);
        let reference_lng = normalize_longitude(longitude);

        let digits_to_recover = SEPARATOR_POSITION - self.separator_index();
        // Size of the cell the missing digits select
        let prefix_precision = latitude_precision(digits_to_recover);

        let reference = encode(reference_lat, reference_lng, PAIR_CODE_LENGTH)?;
        let candidate = Self::parse(&format!(
            "{}{}",
            &reference.as_str()[..digits_to_recover],
            self.as_str()
        ))?;
        let center = candidate.decode()?.center();

        let mut recovered_lat = center.latitude();
        let mut recovered_lng = center.longitude();
        let mut moved = true;

        let lat_diff = recovered_lat - reference_lat;
        if lat_diff > prefix_precision / 2.0 && recovered_lat - prefix_precision > -LATITUDE_MAX {
            recovered_lat -= prefix_precision;
        } else if lat_diff < -prefix_precision / 2.0
            && recovered_lat + prefix_precision < LATITUDE_MAX
        {
            recovered_lat += prefix_precision;
        } else {
            moved = false;
        }

        // Measure the short way round so a prefix taken across the antimeridian still matches
        let lng_diff =
            (recovered_lng - reference_lng + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX)
                - LONGITUDE_MAX;
        if lng_diff > prefix_precision / 2.0 {
            recovered_lng -= prefix_precision;
            moved = true;
        } else if lng_diff < -prefix_precision / 2.0 {
            recovered_lng += prefix_precision;
            moved = true;
        }

        if moved {
            trace!(
                "Moved candidate {candidate} to ({recovered_lat:.6}, {recovered_lng:.6}) toward reference"
            );
        }

        let recovered = encode(recovered_lat, recovered_lng, candidate.digit_count())?;
        debug!("Recovered {self} as {recovered}");
        Ok(recovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_prefix() {
        assert_eq!(
            recover_nearest("+2VX", 51.370_112_5, -1.217_765_625).unwrap(),
            "9C3W9QCJ+2VX"
        );
        assert_eq!(
            recover_nearest("CJ+2VX", 51.370_867_5, -1.217_765_625).unwrap(),
            "9C3W9QCJ+2VX"
        );
    }

    #[test]
    fn recovers_across_cell_boundary() {
        assert_eq!(recover_nearest("22+", 42.899, 9.012).unwrap(), "8FJFW222+");
        assert_eq!(
            recover_nearest("22+", 14.951_25, -23.500_1).unwrap(),
            "796RXG22+"
        );
    }

    #[test]
    fn recovery_does_not_cross_north_pole() {
        assert_eq!(recover_nearest("2222+22", 89.6, 0.0).unwrap(), "CFX22222+22");
    }

    #[test]
    fn recovery_does_not_cross_south_pole() {
        // Reference in the bottom band, short code near its top edge
        let full = recover_nearest("XXXX+XX", -89.6, 0.0).unwrap();
        let area = full.decode().unwrap();
        assert!(area.south() >= -90.0);
        assert!(area.north() <= -89.0);
    }

    #[test]
    fn recovery_wraps_antimeridian() {
        // Reference just east of the antimeridian, code just west of it
        let full = recover_nearest("XXXX+XX", 0.5, -179.9).unwrap();
        let area = full.decode().unwrap();
        assert!(area.west() > 179.0, "recovered {full}");
    }

    #[test]
    fn reference_just_below_north_pole() {
        let latitude = f64::from_bits(90f64.to_bits() - 1);
        assert_eq!(
            recover_nearest("2222+22", latitude, 0.0).unwrap(),
            "CFX22222+22"
        );
    }

    #[test]
    fn reference_just_below_antimeridian() {
        let longitude = f64::from_bits(180f64.to_bits() - 1);
        assert_eq!(
            recover_nearest("2222+22", 0.0, longitude).unwrap(),
            "62G22222+22"
        );
    }

    #[test]
    fn recovered_code_keeps_digit_count() {
        let full = recover_nearest("9QCJ+2VX", 51.3, -1.2).unwrap();
        assert_eq!(full.digit_count(), 11);
        assert!(full.is_full());
    }

    #[test]
    fn rejects_full_codes() {
        assert!(matches!(
            recover_nearest("9C3W9QCJ+2VX", 51.3, -1.2),
            Err(CodeError::NotShortCode(_))
        ));
    }

    #[test]
    fn rejects_invalid_codes() {
        assert!(matches!(
            recover_nearest("9QCJ+2", 51.3, -1.2),
            Err(CodeError::InvalidCode(_))
        ));
    }

    #[test]
    fn rejects_non_finite_reference() {
        assert!(matches!(
            recover_nearest("9QCJ+2VX", f64::INFINITY, -1.2),
            Err(CodeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn normalizes_reference() {
        assert_eq!(
            recover_nearest("9QCJ+2VX", 51.3, 358.8).unwrap(),
            recover_nearest("9QCJ+2VX", 51.3, -1.2).unwrap()
        );
    }
}
