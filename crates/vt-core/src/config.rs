//! User-facing voyage configuration.

use crate::{GeoPoint, Route, SimConfig, VtResult};

/// Everything needed to start a voyage, in the units a person would type.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and turned into a validated [`SimConfig`] + [`Route`] pair
/// by [`VoyageConfig::validate`].  Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VoyageConfig {
    /// Departure point.
    pub start: GeoPoint,

    /// Destination.
    pub end: GeoPoint,

    /// Vessel speed in km/h.
    pub speed_kmph: f64,

    /// Marker refresh rate in frames per second.
    pub refresh_rate_fps: f64,
}

impl VoyageConfig {
    /// Departure point of the default voyage.
    pub const DEFAULT_START: GeoPoint = GeoPoint::new(22.1696, 91.4996);
    /// Destination of the default voyage.
    pub const DEFAULT_END: GeoPoint = GeoPoint::new(22.2637, 91.7159);

    /// Check every field and derive the motion parameters and the route.
    pub fn validate(&self) -> VtResult<(SimConfig, Route)> {
        let sim = SimConfig::from_rates(self.speed_kmph, self.refresh_rate_fps)?;
        let route = Route::new(self.start, self.end)?;
        Ok((sim, route))
    }
}

impl Default for VoyageConfig {
    fn default() -> Self {
        Self {
            start:            Self::DEFAULT_START,
            end:              Self::DEFAULT_END,
            speed_kmph:       20.0,
            refresh_rate_fps: 2.0,
        }
    }
}
