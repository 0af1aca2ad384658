//! Refresh timer: drives a [`Voyage`] on a dedicated thread.
//!
//! The timer is an explicit resource.  [`start`] acquires it and returns a
//! [`VoyageHandle`]; [`VoyageHandle::stop`] (or dropping the handle) releases
//! it.  The owner binds the handle to its own lifetime, e.g. acquires it when
//! a map view is shown and drops it when the view goes away.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};
use vt_core::{GeoPoint, Route, SimConfig};

use crate::{SimResult, SimulationState, TickFailure, Voyage, VoyageObserver, VoyageStatus};

const TIMER_THREAD_NAME: &str = "vt-refresh-timer";

/// A read-only copy of the voyage as of the last completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoyageSnapshot {
    /// Ticks processed so far.
    pub ticks:  u64,
    pub state:  SimulationState,
    pub status: VoyageStatus,
}

impl VoyageSnapshot {
    fn of(voyage: &Voyage) -> Self {
        Self {
            ticks:  voyage.clock().current_tick.0,
            state:  voyage.state(),
            status: voyage.status(),
        }
    }
}

/// Start a voyage along `route` and tick it every
/// `config.refresh_interval()` on a dedicated thread.
///
/// The first tick fires one interval after the call, except on a zero-length
/// route, where arrival is reported immediately.  Ticks never overlap; time
/// spent inside a tick is not compensated, so the cadence drifts under load.
pub fn start<O>(config: SimConfig, route: Route, mut observer: O) -> SimResult<VoyageHandle>
where
    O: VoyageObserver + Send + 'static,
{
    let mut voyage = Voyage::new(config, route);
    let shared = Arc::new(RwLock::new(VoyageSnapshot::of(&voyage)));
    let (stop_tx, stop_rx) = mpsc::channel::<()>();

    let interval = config.refresh_interval();
    let published = Arc::clone(&shared);
    let thread = thread::Builder::new()
        .name(TIMER_THREAD_NAME.to_owned())
        .spawn(move || {
            if !guarded("on_start", || observer.on_start(voyage.route())) {
                fail(&mut voyage, &mut observer);
                *published.write().unwrap_or_else(PoisonError::into_inner) =
                    VoyageSnapshot::of(&voyage);
            }

            let mut wait = if voyage.route().is_degenerate() { Duration::ZERO } else { interval };
            while !voyage.status().is_terminal() {
                // Sleeping on the channel lets `stop` interrupt the wait.
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                wait = interval;

                let finished = match panic::catch_unwind(AssertUnwindSafe(|| voyage.tick(&mut observer))) {
                    Ok(outcome) => outcome.is_terminal(),
                    Err(_) => {
                        fail(&mut voyage, &mut observer);
                        true
                    }
                };
                *published.write().unwrap_or_else(PoisonError::into_inner) =
                    VoyageSnapshot::of(&voyage);
                if finished {
                    break;
                }
            }

            debug!("refresh timer exiting at {} ({:?})", voyage.clock(), voyage.status());
            let status = voyage.status();
            guarded("on_stop", || observer.on_stop(status));
        })?;

    Ok(VoyageHandle {
        stop_tx: Some(stop_tx),
        thread:  Some(thread),
        shared,
    })
}

/// Run an observer callback outside the tick, keeping the timer thread alive
/// if it panics.  Returns `false` if it did.
fn guarded(hook: &str, f: impl FnOnce()) -> bool {
    let ok = panic::catch_unwind(AssertUnwindSafe(f)).is_ok();
    if !ok {
        warn!("observer panicked in {hook}");
    }
    ok
}

/// Put the voyage in its failed state after an observer panic and tell the
/// observer.
fn fail<O: VoyageObserver>(voyage: &mut Voyage, observer: &mut O) {
    let failure = TickFailure::ObserverPanicked;
    let tick = voyage.abort(failure);
    guarded("on_failure", || observer.on_failure(tick, failure));
}

/// Owning handle to a running refresh timer.
///
/// Dropping the handle stops the timer.
#[derive(Debug)]
pub struct VoyageHandle {
    stop_tx: Option<Sender<()>>,
    thread:  Option<JoinHandle<()>>,
    shared:  Arc<RwLock<VoyageSnapshot>>,
}

impl VoyageHandle {
    /// Cancel the timer and wait for its thread to exit.
    ///
    /// Safe to call any number of times, including after natural arrival.
    /// Once it returns the observer receives no further callbacks.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            // Fails only if the timer already exited on its own.
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("refresh timer thread panicked");
            }
        }
    }

    /// The voyage as of the last completed tick.
    pub fn snapshot(&self) -> VoyageSnapshot {
        *self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current position of the vessel, for repositioning a marker.
    pub fn position(&self) -> GeoPoint {
        self.snapshot().state.current_position
    }

    pub fn status(&self) -> VoyageStatus {
        self.snapshot().status
    }

    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.snapshot().ticks
    }

    /// `true` once the timer thread is no longer ticking, either because the
    /// voyage finished or because the handle was stopped.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for VoyageHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
