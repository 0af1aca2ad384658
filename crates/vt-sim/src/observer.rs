//! Observer hooks through which the presentation layer follows a voyage.

use log::{info, warn};
use vt_core::{GeoPoint, Route, Tick};

use crate::{TickFailure, VoyageStatus};

/// Callbacks invoked by [`Voyage::tick`][crate::Voyage::tick] and by the
/// refresh timer.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  When driven by a
/// [`VoyageHandle`][crate::VoyageHandle] every call happens on the timer
/// thread, one tick at a time.
///
/// # Example — marker mover
///
/// ```rust,ignore
/// struct MarkerMover { marker: MarkerId }
///
/// impl VoyageObserver for MarkerMover {
///     fn on_position(&mut self, _tick: Tick, position: GeoPoint, _fraction: f64) {
///         map.move_marker(self.marker, position.lat, position.lon);
///     }
/// }
/// ```
pub trait VoyageObserver {
    /// Called once before the first tick, with the static route geometry
    /// (start/end markers, connecting line, map centre).
    fn on_start(&mut self, _route: &Route) {}

    /// Called on every tick that moves the vessel.
    ///
    /// `fraction` is the share of the leg completed, strictly increasing
    /// across calls and always below `1.0`.
    fn on_position(&mut self, _tick: Tick, _position: GeoPoint, _fraction: f64) {}

    /// Called once, on the tick that detects arrival.  `destination` is
    /// exactly the route's end point.
    fn on_arrival(&mut self, _tick: Tick, _destination: GeoPoint) {}

    /// Called once if the voyage stops abnormally.
    fn on_failure(&mut self, _tick: Tick, _failure: TickFailure) {}

    /// Called when the refresh timer shuts down, whether on arrival, failure,
    /// or an explicit [`VoyageHandle::stop`][crate::VoyageHandle::stop].
    fn on_stop(&mut self, _status: VoyageStatus) {}
}

/// A [`VoyageObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl VoyageObserver for NoopObserver {}

/// A [`VoyageObserver`] that renders the voyage into the log, one line per
/// marker update, in the wording of the map popups.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl VoyageObserver for LogObserver {
    fn on_start(&mut self, route: &Route) {
        let [start, end] = route.polyline();
        info!("map centred on {}", route.center());
        info!("Start Point  Latitude: {}  Longitude: {}", start.lat, start.lon);
        info!("End Point  Latitude: {}  Longitude: {}", end.lat, end.lon);
        info!("route line {start} -> {end}, {:.0} m", route.total_distance_m());
    }

    fn on_position(&mut self, tick: Tick, position: GeoPoint, fraction: f64) {
        info!(
            "{tick}: Vessel is moving.  Latitude: {:.4}  Longitude: {:.4}  ({:.1}%)",
            position.lat,
            position.lon,
            fraction * 100.0,
        );
    }

    fn on_arrival(&mut self, tick: Tick, destination: GeoPoint) {
        info!(
            "{tick}: Vessel arrived.  Latitude: {:.4}  Longitude: {:.4}",
            destination.lat, destination.lon,
        );
    }

    fn on_failure(&mut self, tick: Tick, failure: TickFailure) {
        warn!("{tick}: voyage stopped: {failure}");
    }
}
