//! Spherical geodesy: distances, bearings and circles on a reference body.
//!
//! A [`Sphere`] is nothing more than a radius. All operations are pure
//! functions of their inputs and the radius, so the named bodies are plain
//! `const` values that can be shared freely between threads.
//!
//! # Overview
//!
//! - [`Sphere::haversine_distance`] - Great-circle distance between two coordinates
//! - [`Sphere::initial_bearing`] - Forward azimuth from one coordinate to another
//! - [`Sphere::destination_point`] - Forward geodesic: origin + bearing + distance
//! - [`Sphere::circle`] - Closed polygon approximating a circle within a tolerance
//!
//! Inputs are in degrees (longitude, latitude, bearing) and meters (distances,
//! altitude). No range validation is applied to coordinates: out of range
//! values give mathematically defined but geographically meaningless results.
//!
//! # Circle Discretization
//!
//! A regular N-gon inscribed in a circle of radius `r` deviates from the true
//! circle by at most its sagitta, `r·(1 − cos(π/N))`. [`Sphere::circle`] picks
//! the smallest `N ≥ 4` whose sagitta does not exceed the requested maximum
//! error and places each vertex with [`Sphere::destination_point`].
//!
//! ```
//! # use geokml_core::{geometry::Coordinate, sphere::Sphere};
//! let center = Coordinate::new(13.631333, 46.4385);
//! let ring = Sphere::WGS84.circle(center, 50.0, 1.0).unwrap();
//! assert_eq!(ring.first(), ring.last());
//! ```

use std::{f64::consts::PI, fmt, str::FromStr};

use log::{debug, trace};
use serde::Deserialize;

use crate::{error::ValueError, geometry::Coordinate};

/// Smallest number of distinct vertices in a generated circle.
pub const MIN_CIRCLE_VERTICES: usize = 4;

/// Largest number of distinct vertices in a generated circle.
pub const MAX_CIRCLE_VERTICES: usize = 1 << 20;

/// A spherical reference body, defined by its radius in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Earth sphere with the WGS84 equatorial radius, 6 378 137 m.
    pub const WGS84: Self = Self {
        radius: 6_378_137.0,
    };

    /// The FAI sphere used for competition distances, 6 371 000 m.
    pub const FAI: Self = Self {
        radius: 6_371_000.0,
    };

    /// Mean lunar radius, 1 737 400 m.
    pub const MOON: Self = Self {
        radius: 1_737_400.0,
    };

    /// Mean Martian radius, 3 389 500 m.
    pub const MARS: Self = Self {
        radius: 3_389_500.0,
    };

    /// Creates a sphere with a custom radius.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidRadius`] unless `radius` is finite and positive.
    pub fn new(radius: f64) -> Result<Self, ValueError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ValueError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    /// Returns the radius in meters
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Returns the great-circle distance in meters between `c1` and `c2`.
    ///
    /// Fast to compute, but on the real Earth the error of a spherical model
    /// reaches about 0.5% near the poles. Altitude is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geokml_core::{geometry::Coordinate, sphere::Sphere};
    /// let a = Coordinate::new(-108.6180554, 35.4325002);
    /// let b = Coordinate::new(-108.61, 35.43);
    /// let distance = Sphere::FAI.haversine_distance(a, b);
    /// assert!((distance - 781.0).abs() < 1e-3);
    /// ```
    pub fn haversine_distance(self, c1: Coordinate, c2: Coordinate) -> f64 {
        let lat1 = c1.lat().to_radians();
        let lat2 = c2.lat().to_radians();
        let delta_lat = lat2 - lat1;
        let delta_lon = (c2.lon() - c1.lon()).to_radians();

        let sin_half_delta_lat = (delta_lat / 2.0).sin();
        let sin_half_delta_lon = (delta_lon / 2.0).sin();
        let a = sin_half_delta_lat * sin_half_delta_lat
            + lat1.cos() * lat2.cos() * sin_half_delta_lon * sin_half_delta_lon;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius * c
    }

    /// Returns the initial bearing in degrees, in `(-180, 180]`, of the great
    /// circle path from `c1` to `c2`. Bearings are clockwise from true north.
    pub fn initial_bearing(self, c1: Coordinate, c2: Coordinate) -> f64 {
        let lat1 = c1.lat().to_radians();
        let lat2 = c2.lat().to_radians();
        let delta_lon = (c2.lon() - c1.lon()).to_radians();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        y.atan2(x).to_degrees()
    }

    /// Returns the coordinate reached by travelling `distance` meters from
    /// `origin` along the great circle with initial `bearing` degrees.
    ///
    /// The returned longitude is not normalized and may leave `[-180, 180]`.
    /// The altitude of `origin` is carried over unchanged.
    pub fn destination_point(self, origin: Coordinate, bearing: f64, distance: f64) -> Coordinate {
        let lat1 = origin.lat().to_radians();
        let lon1 = origin.lon().to_radians();
        let angular_distance = distance / self.radius;
        let bearing = bearing.to_radians();

        let lat2 = (lat1.sin() * angular_distance.cos()
            + lat1.cos() * angular_distance.sin() * bearing.cos())
        .asin();
        let lon2 = lon1
            + (bearing.sin() * angular_distance.sin() * lat1.cos())
                .atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

        Coordinate::new(lon2.to_degrees(), lat2.to_degrees()).with_alt(origin.alt())
    }

    /// Approximates a circle of `radius` meters around `center` with a closed
    /// ring of coordinates.
    ///
    /// The ring has `N + 1` entries: `N` vertices at bearings `i·360/N` from
    /// north, followed by a copy of the first vertex. `N` is the smallest count
    /// of at least [`MIN_CIRCLE_VERTICES`] whose [`sagitta`] is within
    /// `max_error`. Every vertex has the altitude of `center`.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` or `max_error` is not finite and positive,
    /// or if `max_error` is so small relative to `radius` that more than
    /// [`MAX_CIRCLE_VERTICES`] vertices would be needed.
    pub fn circle(
        self,
        center: Coordinate,
        radius: f64,
        max_error: f64,
    ) -> Result<Vec<Coordinate>, ValueError> {
        let vertices = circle_vertex_count(radius, max_error)?;
        debug!(vertices, radius, max_error; "Discretizing circle");

        let mut ring = Vec::with_capacity(vertices + 1);
        for i in 0..vertices {
            let bearing = 360.0 * i as f64 / vertices as f64;
            ring.push(self.destination_point(center, bearing, radius));
        }
        ring.push(ring[0]);

        trace!(ring_len = ring.len(); "Circle ring generated");
        Ok(ring)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Returns the maximum distance between a circle of `radius` and the edges of
/// an inscribed regular polygon with `vertices` vertices.
pub fn sagitta(radius: f64, vertices: usize) -> f64 {
    radius * (1.0 - (PI / vertices as f64).cos())
}

/// Returns the number of distinct vertices [`Sphere::circle`] uses for the
/// given radius and tolerance.
///
/// # Errors
///
/// See [`Sphere::circle`].
///
/// # Examples
///
/// ```
/// # use geokml_core::sphere::{circle_vertex_count, sagitta};
/// let n = circle_vertex_count(1000.0, 1.0).unwrap();
/// assert!(sagitta(1000.0, n) <= 1.0);
/// assert!(sagitta(1000.0, n - 1) > 1.0);
/// ```
pub fn circle_vertex_count(radius: f64, max_error: f64) -> Result<usize, ValueError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ValueError::InvalidRadius(radius));
    }
    if !max_error.is_finite() || max_error <= 0.0 {
        return Err(ValueError::InvalidTolerance(max_error));
    }
    if max_error >= radius {
        return Ok(MIN_CIRCLE_VERTICES);
    }

    let half_angle = (1.0 - max_error / radius).acos();
    let estimate = (PI / half_angle).ceil();
    if !estimate.is_finite() || estimate > MAX_CIRCLE_VERTICES as f64 {
        return Err(ValueError::ToleranceTooSmall {
            radius,
            max_error,
            limit: MAX_CIRCLE_VERTICES,
        });
    }

    // The closed form can be off by one through rounding in either direction.
    let mut vertices = (estimate as usize).max(MIN_CIRCLE_VERTICES);
    while sagitta(radius, vertices) > max_error {
        vertices += 1;
    }
    while vertices > MIN_CIRCLE_VERTICES && sagitta(radius, vertices - 1) <= max_error {
        vertices -= 1;
    }
    if vertices > MAX_CIRCLE_VERTICES {
        return Err(ValueError::ToleranceTooSmall {
            radius,
            max_error,
            limit: MAX_CIRCLE_VERTICES,
        });
    }

    Ok(vertices)
}

/// Names of the predefined [`Sphere`] constants.
///
/// Used to select a body from configuration files or user input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SphereName {
    #[default]
    Wgs84,
    Fai,
    Moon,
    Mars,
}

impl SphereName {
    /// Returns the named constant
    pub fn sphere(self) -> Sphere {
        match self {
            Self::Wgs84 => Sphere::WGS84,
            Self::Fai => Sphere::FAI,
            Self::Moon => Sphere::MOON,
            Self::Mars => Sphere::MARS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wgs84 => "wgs84",
            Self::Fai => "fai",
            Self::Moon => "moon",
            Self::Mars => "mars",
        }
    }
}

impl fmt::Display for SphereName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SphereName {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" => Ok(Self::Wgs84),
            "fai" => Ok(Self::Fai),
            "moon" => Ok(Self::Moon),
            "mars" => Ok(Self::Mars),
            _ => Err(ValueError::UnknownSphere(s.to_string())),
        }
    }
}

impl From<SphereName> for Sphere {
    fn from(name: SphereName) -> Self {
        name.sphere()
    }
}
