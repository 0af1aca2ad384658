//! vessel — runs one voyage in real time and logs every marker update.
//!
//! Stands in for the map view: the static scene (start/end markers, route
//! line) is logged once, then the moving marker is logged at the refresh rate
//! until the vessel arrives.
//!
//! Usage: `vessel [config.json]`.  Without a file the default voyage is used
//! (20 km/h at 2 fps, about 1 h 14 min of wall time).  Example file:
//!
//! ```json
//! { "start": { "lat": 22.1696, "lon": 91.4996 },
//!   "end":   { "lat": 22.2637, "lon": 91.7159 },
//!   "speed_kmph": 2000.0, "refresh_rate_fps": 10.0 }
//! ```

use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use vt_core::{GeoPoint, Route, Tick, VoyageConfig};
use vt_sim::{LogObserver, TickFailure, VoyageObserver, VoyageStatus};

// ── Observer wrapper that signals the end of the voyage ──────────────────────

struct UntilStopped {
    inner: LogObserver,
    done:  Sender<VoyageStatus>,
}

impl VoyageObserver for UntilStopped {
    fn on_start(&mut self, route: &Route) {
        self.inner.on_start(route);
    }

    fn on_position(&mut self, tick: Tick, position: GeoPoint, fraction: f64) {
        self.inner.on_position(tick, position, fraction);
    }

    fn on_arrival(&mut self, tick: Tick, destination: GeoPoint) {
        self.inner.on_arrival(tick, destination);
    }

    fn on_failure(&mut self, tick: Tick, failure: TickFailure) {
        self.inner.on_failure(tick, failure);
    }

    fn on_stop(&mut self, status: VoyageStatus) {
        // The receiver only goes away once main is already finishing.
        let _ = self.done.send(status);
    }
}

fn load_config(path: Option<&Path>) -> Result<VoyageConfig> {
    let Some(path) = path else {
        return Ok(VoyageConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os().nth(1);
    let voyage = load_config(path.as_deref().map(Path::new))?;
    let (config, route) = voyage.validate()?;

    println!("=== vessel — straight-line voyage ===");
    println!(
        "Speed: {} km/h ({:.3} m/s)  |  Refresh: {} fps ({} ms)",
        voyage.speed_kmph,
        config.speed_mps(),
        voyage.refresh_rate_fps,
        config.refresh_interval_ms(),
    );
    println!(
        "Route: {route}  |  {} ticks to arrival",
        config.ticks_to_arrival(route.total_distance_m()),
    );
    println!();

    let (done_tx, done_rx) = mpsc::channel();
    let observer = UntilStopped { inner: LogObserver, done: done_tx };

    let t0 = Instant::now();
    let mut handle = vt_sim::start(config, route, observer)?;
    let status = done_rx.recv().context("refresh timer exited without reporting")?;
    handle.stop();

    let snapshot = handle.snapshot();
    info!("voyage finished: {status:?}");
    println!();
    println!("Finished in {:.3} s after {} ticks", t0.elapsed().as_secs_f64(), snapshot.ticks);
    println!(
        "  final position   : {}",
        snapshot.state.current_position,
    );
    println!(
        "  distance traveled: {:.1} m of {:.1} m",
        snapshot.state.distance_traveled_m,
        route.total_distance_m(),
    );

    Ok(())
}
