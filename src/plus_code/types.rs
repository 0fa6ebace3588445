//! Geographic primitives and codec settings.

use serde::{Deserialize, Serialize};

use super::alphabet::{DEFAULT_CODE_LENGTH, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT};
use super::error::{CodeError, Result};

/// A geographic location in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
///
/// # Example
///
/// ```
/// use pluscode_core::Point;
///
/// let zurich = Point::new(47.365_59, 8.524_997).unwrap();
/// assert_eq!(zurich.latitude(), 47.365_59);
/// assert!(Point::new(90.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form of a [`Point`].
#[derive(Deserialize)]
struct RawPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = CodeError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Point {
    /// Creates a point, rejecting coordinates outside the valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::OutOfRange`] if latitude is not within `[-90, 90]`,
    /// longitude is not within `[-180, 180]`, or either value is NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if (-LATITUDE_MAX..=LATITUDE_MAX).contains(&latitude)
            && (-LONGITUDE_MAX..=LONGITUDE_MAX).contains(&longitude)
        {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(CodeError::OutOfRange {
                latitude,
                longitude,
            })
        }
    }

    /// Builds a point the caller has already range-checked.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// The area covered by a code.
///
/// A half-open box: the south and west edges belong to the area, the north
/// and east edges belong to the neighbouring cells.
///
/// # Example
///
/// ```
/// use pluscode_core::decode;
///
/// let area = decode("7FG49QCJ+2V").unwrap();
/// assert!(area.contains(&area.center()));
/// assert!(area.contains(&area.min()));
/// assert!(!area.contains(&area.max()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeArea")]
pub struct CodeArea {
    min: Point,
    max: Point,
    code_length: usize,
}

/// Unvalidated wire form of a [`CodeArea`].
#[derive(Deserialize)]
struct RawCodeArea {
    min: Point,
    max: Point,
    code_length: usize,
}

impl TryFrom<RawCodeArea> for CodeArea {
    type Error = CodeError;

    fn try_from(raw: RawCodeArea) -> Result<Self> {
        Self::new(raw.min, raw.max, raw.code_length)
    }
}

impl CodeArea {
    /// Creates an area from its south-west and north-east corners.
    ///
    /// `code_length` is the number of significant digits of the code the
    /// area belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidRange`] unless `min` is strictly south and
    /// west of `max`.
    pub fn new(min: Point, max: Point, code_length: usize) -> Result<Self> {
        if min.latitude < max.latitude && min.longitude < max.longitude {
            Ok(Self {
                min,
                max,
                code_length,
            })
        } else {
            Err(CodeError::InvalidRange(format!(
                "min ({}, {}) must be south-west of max ({}, {})",
                min.latitude, min.longitude, max.latitude, max.longitude
            )))
        }
    }

    /// South-west corner.
    #[must_use]
    pub const fn min(&self) -> Point {
        self.min
    }

    /// North-east corner.
    #[must_use]
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Southern edge latitude.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.min.latitude
    }

    /// Western edge longitude.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.min.longitude
    }

    /// Northern edge latitude.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.max.latitude
    }

    /// Eastern edge longitude.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.max.longitude
    }

    /// Number of significant digits of the code that produced this area.
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Height of the area in degrees.
    #[must_use]
    pub fn latitude_height(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    /// Width of the area in degrees.
    #[must_use]
    pub fn longitude_width(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }

    /// Midpoint of the area.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new_unchecked(
            (self.min.latitude + self.max.latitude) / 2.0,
            (self.min.longitude + self.max.longitude) / 2.0,
        )
    }

    /// Returns true if `point` lies in `[min, max)` on both axes.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        (self.min.latitude..self.max.latitude).contains(&point.latitude)
            && (self.min.longitude..self.max.longitude).contains(&point.longitude)
    }
}

/// Named code lengths for encoding.
///
/// # Precision Table
///
/// | Precision     | Digits | Approximate cell |
/// |---------------|--------|------------------|
/// | Region        | 4      | ~110 km          |
/// | District      | 6      | ~5.5 km          |
/// | Neighbourhood | 8      | ~275 m           |
/// | Building      | 10     | ~14 m            |
/// | Room          | 11     | ~3.5 m           |
/// | Maximum       | 15     | ~1 cm            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CodePrecision {
    /// 4 digits, padded (~110km cell)
    Region,
    /// 6 digits, padded (~5.5km cell)
    District,
    /// 8 digits (~275m cell)
    Neighbourhood,
    /// 10 digits (~14m cell) - the usual precision for a street address
    #[default]
    Building,
    /// 11 digits (~3.5m cell)
    Room,
    /// 15 digits, the finest cell a code can describe
    Maximum,
}

impl CodePrecision {
    /// Returns the number of significant digits for this precision.
    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Region => 4,
            Self::District => 6,
            Self::Neighbourhood => 8,
            Self::Building => DEFAULT_CODE_LENGTH,
            Self::Room => 11,
            Self::Maximum => MAX_DIGIT_COUNT,
        }
    }
}

/// Settings for a [`PlusCodeCore`](crate::PlusCodeCore).
///
/// # Example
///
/// ```
/// use pluscode_core::{CodePrecision, CodecSettings, Point};
///
/// let settings = CodecSettings {
///     precision: CodePrecision::Room,
///     reference: Some(Point::new(51.5, -0.12).unwrap()),
/// };
/// let json = settings.to_json().unwrap();
/// assert_eq!(CodecSettings::from_json(&json).unwrap(), settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CodecSettings {
    /// Precision used when encoding without an explicit length
    pub precision: CodePrecision,

    /// Reference location for shortening and recovery.
    ///
    /// Usually the centre of the city or region the user is in. When unset,
    /// reference-relative operations fail with [`CodeError::MissingReference`].
    pub reference: Option<Point>,
}

impl CodecSettings {
    /// Parses settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Settings`] if the JSON is malformed or holds an
    /// out-of-range reference point.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes these settings to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Settings`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
