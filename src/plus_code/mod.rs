//! Plus Code module.
//!
//! Encodes locations into Open Location Codes and back:
//! - Validation of full, short and padded codes
//! - Encoding coordinates at 4 to 15 digits of precision
//! - Decoding full codes into the area they cover
//! - Shortening codes relative to a nearby reference location
//! - Recovering full codes from short codes and a reference location
//!
//! # Code Structure
//!
//! - The first ten digits are latitude/longitude pairs in base 20
//! - Digits eleven to fifteen each select a cell of a 5 x 4 grid
//! - A `+` follows the eighth digit; shorter codes are padded with `0`
//!
//! # Example Usage
//!
//! ```
//! use pluscode_core::plus_code::{decode, encode, recover_nearest, shorten};
//!
//! // Encode a location at the default precision (10 digits, ~14m)
//! let code = encode(51.370_112_5, -1.217_765_625, 10).unwrap();
//! assert_eq!(code, "9C3W9QCJ+2V");
//!
//! // Decode it back into an area
//! let area = decode(code.as_str()).unwrap();
//! assert!(area.contains(&area.center()));
//!
//! // Drop the digits a nearby reference location can supply
//! let short = shorten(code.as_str(), 51.37, -1.22).unwrap();
//! assert_eq!(short, "CJ+2V");
//!
//! // And bring them back
//! let full = recover_nearest(short.as_str(), 51.37, -1.22).unwrap();
//! assert_eq!(full, code);
//! ```

pub mod alphabet;
pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod recover;
pub mod shorten;
pub mod types;

pub use alphabet::{latitude_precision, longitude_precision, DEFAULT_CODE_LENGTH};
pub use code::{is_full, is_padded, is_short, is_valid, PlusCode};
pub use decode::decode;
pub use encode::encode;
pub use error::{CodeError, Result};
pub use recover::recover_nearest;
pub use shorten::shorten;
pub use types::{CodeArea, CodePrecision, CodecSettings, Point};
