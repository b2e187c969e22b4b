//! Error types for geokml value construction.
//!
//! Every fallible constructor in this crate reports an invalid argument
//! through [`ValueError`]. Errors are raised before any value is produced,
//! so a caller never observes a partially built coordinate ring, color or
//! timestamp.

use thiserror::Error;

/// An argument passed to a value constructor or geometry operation was invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("invalid radius `{0}`: must be finite and positive")]
    InvalidRadius(f64),

    #[error("invalid max error `{0}`: must be finite and positive")]
    InvalidTolerance(f64),

    #[error("max error `{max_error}` is too small for radius `{radius}`: more than {limit} vertices needed")]
    ToleranceTooSmall {
        radius: f64,
        max_error: f64,
        limit: usize,
    },

    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("timestamp `{0}` is outside the RFC 3339 year range 0000-9999")]
    TimestampOutOfRange(String),

    #[error("invalid calendar date or time: {0}")]
    InvalidDateTime(String),

    #[error("invalid coordinate layout: {0}")]
    InvalidLayout(String),

    #[error("unknown sphere `{0}`, valid values: wgs84, fai, moon, mars")]
    UnknownSphere(String),

    #[error("invalid units `{0}`, valid values: fraction, pixels, insetPixels")]
    InvalidUnits(String),

    #[error("invalid {kind} `{value}`, valid values: {expected:?}")]
    InvalidEnum {
        kind: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
}
