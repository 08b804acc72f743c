// Keytrace Input Layer - Event Source Seam
// The pull interface between the transcriber and any event producer

use super::event::RawEvent;

/// Result type for event source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors an event source can surface while pulling events
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event device error: {0}")]
    Evdev(String),
}

/// A producer of raw input events in arrival order.
///
/// `Ok(None)` means the source is exhausted (device closed, or a pending
/// cancellation ended the wait); the transcriber then runs its termination
/// path. Implemented by [`super::DeviceReader`] for real hardware and by
/// scripted fixtures in tests.
pub trait EventSource {
    fn next_event(&mut self) -> SourceResult<Option<RawEvent>>;
}
