//! The `Voyage` state machine and its tick logic.

use log::{debug, info, trace, warn};
use vt_core::{GeoPoint, Route, SimClock, SimConfig, Tick};

use crate::{TickFailure, VoyageObserver};

// ── State ─────────────────────────────────────────────────────────────────────

/// Mutable simulation state, owned by exactly one [`Voyage`].
///
/// `distance_traveled_m` never decreases.  Once it reaches the route length
/// `current_position` is the route's end point and the state is frozen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub distance_traveled_m: f64,
    pub current_position:    GeoPoint,
}

/// Where a voyage is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VoyageStatus {
    /// Still advancing towards the destination.
    Underway,
    /// Reached the destination; terminal.
    Arrived,
    /// Stopped abnormally; terminal.
    Failed(TickFailure),
}

impl VoyageStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, VoyageStatus::Underway)
    }
}

/// What a single call to [`Voyage::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The vessel was moved to this position.
    Moved(GeoPoint),
    /// Arrival was detected on this tick; the position is the exact end point.
    Arrived(GeoPoint),
    /// The voyage had already finished; nothing changed.
    Idle,
}

impl TickOutcome {
    /// `true` if no further tick will change the state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TickOutcome::Moved(_))
    }
}

// ── Voyage ────────────────────────────────────────────────────────────────────

/// A vessel moving at constant speed along one straight [`Route`].
///
/// `Voyage` holds no timer: each call to [`tick`](Voyage::tick) performs one
/// firing of the refresh action.  The refresh timer
/// ([`VoyageHandle`][crate::VoyageHandle]) calls it on a fixed cadence; tests
/// and offline tools call it directly.
///
/// Per tick:
///
/// 1. **Arrival check** — if `distance_traveled_m >= total_distance_m`, snap
///    the position to the end point, report arrival, and stop.
/// 2. **Move** — `fraction = distance / total`, interpolate, emit.
/// 3. **Advance** — add one step (`speed * interval`) to the distance.
///
/// The distance is recomputed as `steps * step_m` rather than accumulated, so
/// the number of ticks to arrival is exactly `ceil(total / step_m)`.
#[derive(Clone, Debug)]
pub struct Voyage {
    config: SimConfig,
    route:  Route,
    clock:  SimClock,
    steps:  u64,
    state:  SimulationState,
    status: VoyageStatus,
}

impl Voyage {
    /// Create a voyage positioned at the start of `route`.
    pub fn new(config: SimConfig, route: Route) -> Self {
        debug!(
            "voyage {route} at {:.3} m/s, one tick every {} ms ({} ticks to arrival)",
            config.speed_mps(),
            config.refresh_interval_ms(),
            config.ticks_to_arrival(route.total_distance_m()),
        );
        Self {
            clock: config.make_clock(),
            config,
            route,
            steps: 0,
            state: SimulationState {
                distance_traveled_m: 0.0,
                current_position:    route.start(),
            },
            status: VoyageStatus::Underway,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    #[inline]
    pub fn status(&self) -> VoyageStatus {
        self.status
    }

    /// Share of the leg completed, in `[0, 1]`.  A zero-length leg counts as
    /// complete.
    pub fn fraction(&self) -> f64 {
        let total = self.route.total_distance_m();
        if total <= 0.0 {
            return 1.0;
        }
        (self.state.distance_traveled_m / total).clamp(0.0, 1.0)
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Run one firing of the refresh action.
    pub fn tick<O: VoyageObserver + ?Sized>(&mut self, observer: &mut O) -> TickOutcome {
        if self.status.is_terminal() {
            return TickOutcome::Idle;
        }
        let now = self.clock.current_tick;
        self.clock.advance();

        let total = self.route.total_distance_m();

        // ── Arrival ───────────────────────────────────────────────────────
        //
        // Also covers the zero-length leg: 0 >= 0 on the first tick, so the
        // division below is never reached with total == 0.
        if self.state.distance_traveled_m >= total {
            let end = self.route.end();
            self.state.current_position = end;
            self.status = VoyageStatus::Arrived;
            info!("{now}: arrived at {end} after {:.1} m", self.state.distance_traveled_m);
            observer.on_arrival(now, end);
            return TickOutcome::Arrived(end);
        }

        // ── Move ──────────────────────────────────────────────────────────
        let fraction = (self.state.distance_traveled_m / total).clamp(0.0, 1.0);
        let position = self.route.position_at(fraction);
        self.state.current_position = position;
        trace!("{now}: {position} fraction={fraction:.6}");
        observer.on_position(now, position, fraction);

        // ── Advance ───────────────────────────────────────────────────────
        self.steps += 1;
        self.state.distance_traveled_m = self.steps as f64 * self.config.step_m();

        TickOutcome::Moved(position)
    }

    /// End the voyage with `failure`, whatever its current status.
    ///
    /// Used when a tick was cut short (e.g. the observer panicked); the state
    /// stays as the interrupted tick left it and later ticks are
    /// [`TickOutcome::Idle`].  Returns the tick that was being processed.
    pub fn abort(&mut self, failure: TickFailure) -> Tick {
        let last = Tick(self.clock.current_tick.0.saturating_sub(1));
        self.status = VoyageStatus::Failed(failure);
        warn!("{last}: voyage aborted: {failure}");
        last
    }

    /// Tick until the voyage reaches a terminal state, without waiting
    /// between ticks.
    ///
    /// Returns the number of ticks that moved the vessel.  Useful for tests
    /// and for precomputing a track.
    pub fn run_to_arrival<O: VoyageObserver + ?Sized>(&mut self, observer: &mut O) -> u64 {
        let mut moved = 0;
        loop {
            match self.tick(observer) {
                TickOutcome::Moved(_) => moved += 1,
                _ => return moved,
            }
        }
    }
}
