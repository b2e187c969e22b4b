//! geokml Core Types and Geodesy
//!
//! This crate provides the value types and the spherical geometry engine used
//! to populate geokml documents with coordinate data. It includes:
//!
//! - **Geometry**: Coordinates and 2-D anchor points ([`geometry`] module)
//! - **Colors**: Color handling with CSS and KML hex support ([`color::Color`])
//! - **Time**: RFC 3339 range-checked timestamps ([`time::Timestamp`])
//! - **Sphere**: Haversine distance, forward geodesic and circle discretization
//!   on a spherical body ([`sphere`] module)
//! - **Errors**: Invalid-argument conditions ([`error::ValueError`])

pub mod color;
pub mod error;
pub mod geometry;
pub mod sphere;
pub mod time;

pub use error::ValueError;
