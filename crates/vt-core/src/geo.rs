//! Geographic coordinate type and route geometry.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The simulator advances a vessel
//! by a few metres per tick, so single precision (~1 m at the equator) would
//! visibly quantise the track.

use std::fmt;

use crate::{VtError, VtResult};

/// Sphere radius used by [`GeoPoint::distance_m`], in metres.
///
/// The WGS-84 equatorial radius.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Reject non-finite values and coordinates outside the valid
    /// latitude/longitude ranges.
    pub fn validate(self) -> VtResult<Self> {
        if self.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
        {
            Ok(self)
        } else {
            Err(VtError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric bit-for-bit: the coordinate deltas enter the formula only
    /// through their absolute values, and the latitude cosines commute.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).abs().to_radians();
        let d_lon = (other.lon - self.lon).abs().to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Linear interpolation towards `other`; see [`interpolate`].
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        interpolate(self, other, fraction)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Interpolate latitude and longitude independently between `start` and `end`.
///
/// Written as a weighted sum so that `fraction == 0.0` yields `start` and
/// `fraction == 1.0` yields `end` exactly.  No clamping is performed: values
/// outside `[0, 1]` extrapolate along the same line.  Callers that need a
/// bounded position use [`Route::position_at`].
#[inline]
pub fn interpolate(start: GeoPoint, end: GeoPoint, fraction: f64) -> GeoPoint {
    let keep = 1.0 - fraction;
    GeoPoint {
        lat: start.lat * keep + end.lat * fraction,
        lon: start.lon * keep + end.lon * fraction,
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The single straight leg a vessel travels, from `start` to `end`.
///
/// Both endpoints are validated on construction and the total length is
/// computed once; a `Route` is immutable for the lifetime of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Route {
    start:            GeoPoint,
    end:              GeoPoint,
    total_distance_m: f64,
}

impl Route {
    pub fn new(start: GeoPoint, end: GeoPoint) -> VtResult<Self> {
        let start = start.validate()?;
        let end = end.validate()?;
        Ok(Self {
            start,
            end,
            total_distance_m: start.distance_m(end),
        })
    }

    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GeoPoint {
        self.end
    }

    /// Length of the leg in metres.
    #[inline]
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// `true` when start and end are the same place (zero-length leg).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.total_distance_m <= 0.0
    }

    /// Position after completing `fraction` of the leg, clamped to `[0, 1]`.
    pub fn position_at(&self, fraction: f64) -> GeoPoint {
        interpolate(self.start, self.end, fraction.clamp(0.0, 1.0))
    }

    /// The two vertices of the connecting line drawn under the markers.
    #[inline]
    pub fn polyline(&self) -> [GeoPoint; 2] {
        [self.start, self.end]
    }

    /// Where a map showing this route is centred: the departure point.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        self.start
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({:.1} m)", self.start, self.end, self.total_distance_m)
    }
}
