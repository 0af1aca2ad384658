//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter, one per
//! firing of the refresh timer.  The mapping to elapsed time is held in
//! `SimClock`:
//!
//!   elapsed_ms = tick * refresh_interval_ms
//!
//! The wall-clock cadence is best-effort; the clock reports *simulated* time,
//! which is what the vessel's travelled distance is derived from.

use std::fmt;
use std::time::Duration;

use crate::{VtError, VtResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts tick counts into elapsed simulated time.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Milliseconds of simulated time one tick represents.
    pub refresh_interval_ms: f64,
    /// The next tick to be processed — advanced by `SimClock::advance()`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(refresh_interval_ms: f64) -> Self {
        Self {
            refresh_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.refresh_interval_ms / 1000.0
    }

    /// Break elapsed time into (hour, minute, second) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs().max(0.0) as u64;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Validated motion parameters for one run.
///
/// Built from a [`VoyageConfig`][crate::VoyageConfig] (speed in km/h, refresh
/// rate in frames per second) or directly via [`SimConfig::new`].  Both
/// values are positive and finite by construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimConfig {
    speed_mps:           f64,
    refresh_interval_ms: f64,
}

impl SimConfig {
    /// Construct from a speed in metres per second and a tick interval in
    /// milliseconds.
    pub fn new(speed_mps: f64, refresh_interval_ms: f64) -> VtResult<Self> {
        if !(speed_mps.is_finite() && speed_mps > 0.0) {
            return Err(VtError::InvalidSpeed(speed_mps));
        }
        if !(refresh_interval_ms.is_finite() && refresh_interval_ms > 0.0) {
            return Err(VtError::InvalidRefreshRate(refresh_interval_ms));
        }
        let config = Self { speed_mps, refresh_interval_ms };
        if !config.step_m().is_finite() {
            return Err(VtError::Config(format!(
                "distance per tick overflows ({speed_mps} m/s every {refresh_interval_ms} ms)"
            )));
        }
        Ok(config)
    }

    /// Construct from a speed in km/h and a refresh rate in frames per second:
    /// `speed_mps = kmph * 1000 / 3600`, `refresh_interval_ms = 1000 / fps`.
    pub fn from_rates(speed_kmph: f64, refresh_rate_fps: f64) -> VtResult<Self> {
        if !(refresh_rate_fps.is_finite() && refresh_rate_fps > 0.0) {
            return Err(VtError::InvalidRefreshRateFps(refresh_rate_fps));
        }
        Self::new(speed_kmph * 1000.0 / 3600.0, 1000.0 / refresh_rate_fps)
    }

    #[inline]
    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    #[inline]
    pub fn refresh_interval_ms(&self) -> f64 {
        self.refresh_interval_ms
    }

    /// The refresh interval as a `Duration`, for driving a real timer.
    #[inline]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs_f64(self.refresh_interval_ms / 1000.0)
    }

    /// Metres covered per tick.
    #[inline]
    pub fn step_m(&self) -> f64 {
        self.speed_mps * (self.refresh_interval_ms / 1000.0)
    }

    /// Number of position-emitting ticks before arrival on a leg of
    /// `distance_m`: `ceil(distance_m / step_m)`, or 0 for a zero-length leg.
    pub fn ticks_to_arrival(&self, distance_m: f64) -> u64 {
        if distance_m <= 0.0 {
            return 0;
        }
        (distance_m / self.step_m()).ceil() as u64
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.refresh_interval_ms)
    }
}
