use thiserror::Error;
use vt_core::VtError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("voyage configuration error: {0}")]
    Config(#[from] VtError),

    #[error("failed to spawn the refresh timer thread: {0}")]
    TimerSpawn(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;

/// Why a running voyage stopped before reaching its destination.
///
/// Reported to [`VoyageObserver::on_failure`][crate::VoyageObserver::on_failure]
/// and kept as the terminal [`VoyageStatus`][crate::VoyageStatus].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TickFailure {
    #[error("observer panicked while handling a tick")]
    ObserverPanicked,
}
