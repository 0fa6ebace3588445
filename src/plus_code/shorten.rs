//! Removing leading digits relative to a reference location.

use log::debug;

use super::alphabet::{clip_latitude, latitude_precision, normalize_longitude, SEPARATOR_POSITION};
use super::code::PlusCode;
use super::error::{CodeError, Result};

/// Fraction of a cell the reference may be from the code's center when the
/// cell's digits are dropped. Anything under one half keeps recovery
/// unambiguous; the extra room absorbs reference points near cell edges.
pub const SHORTEN_SAFETY_FACTOR: f64 = 0.3;

/// Shortens a full code by removing as many leading digits as the
/// reference location allows.
///
/// # Errors
///
/// - [`CodeError::InvalidCode`] if `code` is not a valid code
/// - [`CodeError::NotFullCode`] / [`CodeError::PaddedCode`] if it cannot be shortened
/// - [`CodeError::TooFar`] if the reference is too far to drop any digits
/// - [`CodeError::OutOfRange`] if the reference is NaN or infinite
///
/// # Examples
///
/// ```
/// use pluscode_core::shorten;
///
/// let short = shorten("9C3W9QCJ+2VX", 51.370_112_5, -1.217_765_625).unwrap();
/// assert_eq!(short, "+2VX");
///
/// let short = shorten("9C3W9QCJ+2VX", 51.385_212_5, -1.217_765_625).unwrap();
/// assert_eq!(short, "9QCJ+2VX");
/// ```
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<PlusCode> {
    PlusCode::parse(code)?.shorten(latitude, longitude)
}

impl PlusCode {
    /// Removes as many leading digits as the reference location allows.
    ///
    /// See [`shorten`].
    ///
    /// # Errors
    ///
    /// Same as [`shorten`], minus the parsing failure.
    pub fn shorten(&self, latitude: f64, longitude: f64) -> Result<Self> {
        if !self.is_full() {
            return Err(CodeError::NotFullCode(self.to_string()));
        }
        if self.is_padded() {
            return Err(CodeError::PaddedCode(self.to_string()));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CodeError::OutOfRange {
                latitude,
                longitude,
            });
        }

        let center = self.decode()?.center();
        let range = (clip_latitude(latitude) - center.latitude())
            .abs()
            .max((normalize_longitude(longitude) - center.longitude()).abs());

        for removed in [8, 6, 4, 2] {
            if range >= SHORTEN_SAFETY_FACTOR * latitude_precision(removed) {
                continue;
            }
            let remaining = &self.as_str()[removed..];
            // A bare separator carries nothing to recover from
            if remaining.len() < 2 {
                continue;
            }
            debug!("Shortened {self} to {remaining} (reference {range:.6}° from center)");
            return Ok(Self::from_encoded(
                remaining.to_string(),
                SEPARATOR_POSITION - removed,
                self.digit_count() - removed,
                false,
            ));
        }

        Err(CodeError::TooFar {
            code: self.to_string(),
            latitude,
            longitude,
        })
    }
}
