//! Plus Code Core Library
//!
//! Encoding and decoding of Open Location Codes ("Plus Codes").
//! This crate converts coordinates into codes and back, and shortens and
//! recovers codes relative to a nearby reference location.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod plus_code;

pub use api::PlusCodeCore;
pub use plus_code::{
    decode, encode, is_full, is_padded, is_short, is_valid, latitude_precision,
    longitude_precision, recover_nearest, shorten, CodeArea, CodeError, CodePrecision,
    CodecSettings, PlusCode, Point, Result, DEFAULT_CODE_LENGTH,
};
