//! Error types for Plus Code operations.
//!
//! Every failure is reported synchronously to the caller. Nothing here is
//! transient, so callers should never retry an operation that failed.

use thiserror::Error;

/// Error type for Plus Code operations.
#[derive(Error, Debug)]
pub enum CodeError {
    /// The string is not a syntactically valid code.
    #[error("Invalid code: {0}")]
    InvalidCode(String),

    /// Encoding was requested with an illegal number of digits.
    #[error("Invalid code length: {0} (must be at least 4, and even below 10)")]
    InvalidLength(usize),

    /// The operation needs a full code but was given a short one.
    #[error("Not a full code: {0}")]
    NotFullCode(String),

    /// The operation needs a short code but was given a full one.
    #[error("Not a short code: {0}")]
    NotShortCode(String),

    /// Padded codes cannot be shortened.
    #[error("Cannot shorten padded code: {0}")]
    PaddedCode(String),

    /// The reference location is too far from the code to drop any digits.
    #[error("Reference location ({latitude}, {longitude}) is too far from {code} to shorten it")]
    TooFar {
        /// The code that could not be shortened.
        code: String,
        /// Reference latitude.
        latitude: f64,
        /// Reference longitude.
        longitude: f64,
    },

    /// A coordinate is outside the valid range or not a finite number.
    #[error("Coordinate out of range: ({latitude}, {longitude})")]
    OutOfRange {
        /// The offending latitude.
        latitude: f64,
        /// The offending longitude.
        longitude: f64,
    },

    /// An area's south-west corner is not strictly below and left of its north-east corner.
    #[error("Invalid area range: {0}")]
    InvalidRange(String),

    /// A reference-relative operation was called without a configured reference.
    #[error("No reference location configured")]
    MissingReference,

    /// Settings could not be parsed or serialized.
    #[error("Settings serialization failed: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type alias for Plus Code operations.
pub type Result<T> = std::result::Result<T, CodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_error_display() {
        let err = CodeError::InvalidCode("8FWC2300+G6".to_string());
        assert_eq!(err.to_string(), "Invalid code: 8FWC2300+G6");
    }

    #[test]
    fn invalid_length_error_display() {
        let err = CodeError::InvalidLength(7);
        assert_eq!(
            err.to_string(),
            "Invalid code length: 7 (must be at least 4, and even below 10)"
        );
    }

    #[test]
    fn not_full_code_error_display() {
        let err = CodeError::NotFullCode("+G6".to_string());
        assert_eq!(err.to_string(), "Not a full code: +G6");
    }

    #[test]
    fn not_short_code_error_display() {
        let err = CodeError::NotShortCode("8FWC2345+G6".to_string());
        assert_eq!(err.to_string(), "Not a short code: 8FWC2345+G6");
    }

    #[test]
    fn padded_code_error_display() {
        let err = CodeError::PaddedCode("7FG49Q00+".to_string());
        assert_eq!(err.to_string(), "Cannot shorten padded code: 7FG49Q00+");
    }

    #[test]
    fn too_far_error_display() {
        let err = CodeError::TooFar {
            code: "9C3W9QCJ+2VX".to_string(),
            latitude: 10.5,
            longitude: -20.25,
        };
        assert_eq!(
            err.to_string(),
            "Reference location (10.5, -20.25) is too far from 9C3W9QCJ+2VX to shorten it"
        );
    }

    #[test]
    fn out_of_range_error_display() {
        let err = CodeError::OutOfRange {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "Coordinate out of range: (91, 0)");
    }

    #[test]
    fn missing_reference_error_display() {
        assert_eq!(
            CodeError::MissingReference.to_string(),
            "No reference location configured"
        );
    }

    #[test]
    fn settings_error_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CodeError = parse_err.into();
        assert!(matches!(err, CodeError::Settings(_)));
        assert!(err.to_string().starts_with("Settings serialization failed"));
    }
}
