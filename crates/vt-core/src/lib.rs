//! `vt-core` — foundational types for the `vessel_track` simulator.
//!
//! This crate is a dependency of every other `vt-*` crate.  It has no `vt-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, `interpolate`, `Route` |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`config`]      | `VoyageConfig` — the user-facing configuration surface |
//! | [`error`]       | `VtError`, `VtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::VoyageConfig;
pub use error::{VtError, VtResult};
pub use geo::{GeoPoint, Route, interpolate};
pub use time::{SimClock, SimConfig, Tick};
