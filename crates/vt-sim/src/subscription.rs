//! Restart the refresh timer only when the voyage inputs change.

use log::debug;
use vt_core::{Route, SimConfig, VoyageConfig};

use crate::{SimResult, VoyageHandle, VoyageObserver, timer};

/// Keeps at most one refresh timer alive for a presentation layer whose
/// configuration may be re-applied many times.
///
/// [`update`](VoyageSubscription::update) compares the validated
/// `(speed, refresh interval, start, end)` inputs with those of the running
/// timer.  Identical inputs leave the timer untouched (including one that
/// already arrived); different inputs cancel it and start a fresh voyage with
/// a clone of the observer.
pub struct VoyageSubscription<O> {
    observer: O,
    active:   Option<(SimConfig, Route)>,
    handle:   Option<VoyageHandle>,
}

impl<O> VoyageSubscription<O>
where
    O: VoyageObserver + Clone + Send + 'static,
{
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            active: None,
            handle: None,
        }
    }

    /// Apply `config`.  Returns `true` if a new timer was started.
    ///
    /// An invalid config is rejected before the running timer is touched.
    pub fn update(&mut self, config: &VoyageConfig) -> SimResult<bool> {
        let inputs = config.validate()?;
        if self.handle.is_some() && self.active == Some(inputs) {
            return Ok(false);
        }

        self.cancel();
        let (sim, route) = inputs;
        debug!("starting refresh timer for {route}");
        self.handle = Some(timer::start(sim, route, self.observer.clone())?);
        self.active = Some(inputs);
        Ok(true)
    }

    /// Stop the running timer, if any.
    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            debug!("cancelling refresh timer");
            handle.stop();
        }
        self.active = None;
    }

    /// The running timer, if any.
    pub fn handle(&self) -> Option<&VoyageHandle> {
        self.handle.as_ref()
    }

    /// The inputs the running timer was started with.
    pub fn active(&self) -> Option<(SimConfig, Route)> {
        self.active
    }
}
