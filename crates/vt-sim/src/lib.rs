//! `vt-sim` — position simulation loop for the vessel_track simulator.
//!
//! # Tick loop
//!
//! ```text
//! every refresh_interval_ms:
//!   ① Arrival — distance_traveled >= total_distance
//!               → snap to end, on_arrival, cancel the timer.
//!   ② Move    — fraction = distance_traveled / total_distance
//!               → position = interpolate(start, end, fraction), on_position.
//!   ③ Advance — distance_traveled += speed_mps * refresh_interval_s.
//! ```
//!
//! [`Voyage`] is the timer-free state machine; [`start`] runs one on a
//! dedicated thread and returns an owning [`VoyageHandle`];
//! [`VoyageSubscription`] restarts the timer only when its inputs change.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_core::VoyageConfig;
//! use vt_sim::LogObserver;
//!
//! let (config, route) = VoyageConfig::default().validate()?;
//! let mut handle = vt_sim::start(config, route, LogObserver)?;
//! // ... later, when the view goes away:
//! handle.stop();
//! ```

pub mod error;
pub mod observer;
pub mod subscription;
pub mod timer;
pub mod voyage;


pub use error::{SimError, SimResult, TickFailure};
pub use observer::{LogObserver, NoopObserver, VoyageObserver};
pub use subscription::VoyageSubscription;
pub use timer::{VoyageHandle, VoyageSnapshot, start};
pub use voyage::{SimulationState, TickOutcome, Voyage, VoyageStatus};
