//! Code validation and the validated [`PlusCode`] type.
//!
//! A code is accepted when:
//! - it holds exactly one separator, at an even index no greater than 8
//! - a full code's first two digits keep latitude <= 90 and longitude <= 180
//! - padding starts at index 2, 4 or 6 and runs unbroken to the separator
//! - a padded code is full and ends at its separator
//! - the digits after the separator are never a single orphan

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alphabet::{
    digit_value, FIRST_LATITUDE_DIGIT_MAX, FIRST_LONGITUDE_DIGIT_MAX, PADDING_CHARACTER,
    SEPARATOR, SEPARATOR_POSITION,
};
use super::error::{CodeError, Result};

/// A syntactically valid Open Location Code in canonical (upper-case) form.
///
/// Parsing is the only way to obtain one from untrusted input, so every
/// `PlusCode` has already passed validation.
///
/// # Example
///
/// ```
/// use pluscode_core::PlusCode;
///
/// let code: PlusCode = "8fwc2345+g6".parse().unwrap();
/// assert_eq!(code.as_str(), "8FWC2345+G6");
/// assert!(code.is_full());
/// assert_eq!(code.digit_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlusCode {
    code: String,
    separator_index: usize,
    digit_count: usize,
    padded: bool,
}

impl PlusCode {
    /// Validates `code` and converts it to canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidCode`] describing the first rule the
    /// string breaks.
    pub fn parse(code: &str) -> Result<Self> {
        let invalid = |reason: &str| CodeError::InvalidCode(format!("{code:?}: {reason}"));

        if code.len() < 2 {
            return Err(invalid("too short"));
        }
        if !code.is_ascii() {
            return Err(invalid("contains non-ASCII characters"));
        }
        let canonical = code.to_ascii_uppercase();

        let mut separators = canonical.match_indices(SEPARATOR).map(|(index, _)| index);
        let separator_index = separators
            .next()
            .ok_or_else(|| invalid("missing separator"))?;
        if separators.next().is_some() {
            return Err(invalid("more than one separator"));
        }
        if separator_index > SEPARATOR_POSITION || separator_index % 2 == 1 {
            return Err(invalid("separator in an illegal position"));
        }

        let (head, tail) = canonical.split_at(separator_index);
        let tail = &tail[1..];

        let mut padding_start = None;
        for (index, symbol) in head.chars().enumerate() {
            if symbol == PADDING_CHARACTER {
                if padding_start.is_none() {
                    if index == 0 || index % 2 == 1 {
                        return Err(invalid("padding in an illegal position"));
                    }
                    padding_start = Some(index);
                }
            } else if padding_start.is_some() {
                return Err(invalid("digits after padding"));
            } else if digit_value(symbol).is_none() {
                return Err(invalid("illegal character"));
            }
        }

        if padding_start.is_some() {
            if separator_index < SEPARATOR_POSITION {
                return Err(invalid("short codes cannot be padded"));
            }
            if !tail.is_empty() {
                return Err(invalid("padded codes must end with the separator"));
            }
        }
        if tail.chars().any(|symbol| digit_value(symbol).is_none()) {
            return Err(invalid("illegal character after separator"));
        }
        if tail.len() == 1 {
            return Err(invalid("single digit after separator"));
        }

        if separator_index == SEPARATOR_POSITION {
            let mut leading = head.chars().filter_map(digit_value);
            let first_latitude = leading.next().unwrap_or(0);
            let first_longitude = leading.next().unwrap_or(0);
            if first_latitude > FIRST_LATITUDE_DIGIT_MAX
                || first_longitude > FIRST_LONGITUDE_DIGIT_MAX
            {
                return Err(invalid("latitude or longitude out of range"));
            }
        }

        let digit_count = padding_start.unwrap_or(separator_index) + tail.len();
        Ok(Self {
            code: canonical,
            separator_index,
            digit_count,
            padded: padding_start.is_some(),
        })
    }

    /// Wraps a string the encoder produced. Skips validation.
    pub(crate) const fn from_encoded(
        code: String,
        separator_index: usize,
        digit_count: usize,
        padded: bool,
    ) -> Self {
        Self {
            code,
            separator_index,
            digit_count,
            padded,
        }
    }

    /// The canonical code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Index of the separator.
    #[must_use]
    pub const fn separator_index(&self) -> usize {
        self.separator_index
    }

    /// Number of significant digits (excluding separator and padding).
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// True if the separator is at position 8.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.separator_index == SEPARATOR_POSITION
    }

    /// True if the separator is before position 8.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.separator_index < SEPARATOR_POSITION
    }

    /// True if the code contains padding characters.
    #[must_use]
    pub const fn is_padded(&self) -> bool {
        self.padded
    }

    /// The significant digits, with separator and padding removed.
    ///
    /// Re-padding these digits reproduces the original full code.
    ///
    /// ```
    /// use pluscode_core::PlusCode;
    ///
    /// let code: PlusCode = "7FG49Q00+".parse().unwrap();
    /// assert_eq!(code.code_digits(), "7FG49Q");
    /// ```
    #[must_use]
    pub fn code_digits(&self) -> String {
        self.code
            .chars()
            .filter(|&symbol| symbol != SEPARATOR && symbol != PADDING_CHARACTER)
            .collect()
    }

    /// Consumes the code, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.code
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PlusCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PlusCode {
    type Error = CodeError;

    fn try_from(code: String) -> Result<Self> {
        Self::parse(&code)
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.code
    }
}

impl AsRef<str> for PlusCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl PartialEq<str> for PlusCode {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for PlusCode {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

/// Returns true if `code` is a valid full or short code.
///
/// Validation is case-insensitive. Empty strings are invalid.
///
/// # Examples
///
/// ```
/// use pluscode_core::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("8fwc2345+g6"));
/// assert!(!is_valid("8FWC2300+G6"));
/// assert!(!is_valid(""));
/// ```
#[must_use]
pub fn is_valid(code: &str) -> bool {
    PlusCode::parse(code).is_ok()
}

/// Returns true if `code` is valid and short (separator before position 8).
///
/// ```
/// use pluscode_core::is_short;
///
/// assert!(is_short("+G6"));
/// assert!(!is_short("8FWC2345+G6"));
/// ```
#[must_use]
pub fn is_short(code: &str) -> bool {
    PlusCode::parse(code).is_ok_and(|code| code.is_short())
}

/// Returns true if `code` is valid and full (separator at position 8).
#[must_use]
pub fn is_full(code: &str) -> bool {
    PlusCode::parse(code).is_ok_and(|code| code.is_full())
}

/// Returns true if `code` is valid and contains padding.
#[must_use]
pub fn is_padded(code: &str) -> bool {
    PlusCode::parse(code).is_ok_and(|code| code.is_padded())
}
