//! Settings-aware entry point for Plus Code operations.

use crate::plus_code::{
    decode, encode, recover_nearest, shorten, CodeArea, CodeError, CodecSettings, PlusCode,
    Point, Result,
};

/// Core interface for Plus Code functionality.
///
/// Wraps the free functions with a [`CodecSettings`]: encoding uses the
/// configured precision, and shortening/recovery can use the configured
/// reference location.
///
/// # Example
///
/// ```
/// use pluscode_core::{CodecSettings, CodePrecision, Point, PlusCodeCore};
///
/// let core = PlusCodeCore::with_settings(CodecSettings {
///     precision: CodePrecision::Room,
///     reference: Some(Point::new(51.37, -1.22).unwrap()),
/// });
///
/// let code = core.encode(51.370_112_5, -1.217_765_625).unwrap();
/// assert_eq!(code, "9C3W9QCJ+2VX");
///
/// let short = core.shorten(code.as_str()).unwrap();
/// assert_eq!(core.recover_nearest(short.as_str()).unwrap(), code);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlusCodeCore {
    settings: CodecSettings,
}

impl PlusCodeCore {
    /// Creates a `PlusCodeCore` with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use pluscode_core::PlusCodeCore;
    ///
    /// let core = PlusCodeCore::new();
    /// assert!(core.settings().reference.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `PlusCodeCore` with the given settings.
    #[must_use]
    pub const fn with_settings(settings: CodecSettings) -> Self {
        Self { settings }
    }

    /// Gets the current settings.
    #[must_use]
    pub const fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    /// Replaces the current settings.
    pub fn set_settings(&mut self, settings: CodecSettings) {
        self.settings = settings;
    }

    /// Sets or clears the reference location.
    pub fn set_reference(&mut self, reference: Option<Point>) {
        self.settings.reference = reference;
    }

    /// Encodes a location at the configured precision.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::OutOfRange`] if either coordinate is not finite.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<PlusCode> {
        encode(latitude, longitude, self.settings.precision.code_length())
    }

    /// Encodes a point at the configured precision.
    ///
    /// # Errors
    ///
    /// Never fails for a valid [`Point`]; the `Result` mirrors [`Self::encode`].
    pub fn encode_point(&self, point: &Point) -> Result<PlusCode> {
        self.encode(point.latitude(), point.longitude())
    }

    /// Decodes a full code.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(&self, code: &str) -> Result<CodeArea> {
        decode(code)
    }

    /// Shortens a full code relative to the configured reference.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::MissingReference`] if no reference is configured,
    /// otherwise see [`shorten`].
    pub fn shorten(&self, code: &str) -> Result<PlusCode> {
        let reference = self.reference()?;
        self.shorten_near(code, &reference)
    }

    /// Shortens a full code relative to an explicit reference.
    ///
    /// # Errors
    ///
    /// See [`shorten`].
    pub fn shorten_near(&self, code: &str, reference: &Point) -> Result<PlusCode> {
        shorten(code, reference.latitude(), reference.longitude())
    }

    /// Recovers a short code relative to the configured reference.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::MissingReference`] if no reference is configured,
    /// otherwise see [`recover_nearest`].
    pub fn recover_nearest(&self, short_code: &str) -> Result<PlusCode> {
        let reference = self.reference()?;
        self.recover_near(short_code, &reference)
    }

    /// Recovers a short code relative to an explicit reference.
    ///
    /// # Errors
    ///
    /// See [`recover_nearest`].
    pub fn recover_near(&self, short_code: &str, reference: &Point) -> Result<PlusCode> {
        recover_nearest(short_code, reference.latitude(), reference.longitude())
    }

    fn reference(&self) -> Result<Point> {
        self.settings.reference.ok_or(CodeError::MissingReference)
    }
}
