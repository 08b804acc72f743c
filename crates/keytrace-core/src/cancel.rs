// Keytrace Cancellation Token
// Set-once shutdown flag shared between the signal thread and the run loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative shutdown flag.
///
/// Transitions false -> true exactly once and is only ever polled, so a plain
/// atomic boolean is enough. Clones share the same flag; handing a clone to
/// the signal handler thread and another to the device reader lets both
/// observe the same request to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Safe to call from any thread, including more than
    /// once (the flag never goes back to false).
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
