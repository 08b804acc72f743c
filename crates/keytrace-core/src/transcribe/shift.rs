// Keytrace Transcription Layer - Shift Tracker

use crate::action::Action;

/// Tracks whether a shift key is currently held.
///
/// A single boolean covers the whole shift class: left and right shift are
/// indistinguishable, and holding both then releasing one reads as released.
/// Repeats while held keep the state engaged, so the tracker is idempotent
/// under auto-repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftState {
    engaged: bool,
}

impl ShiftState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a shift-key event. Press and repeat engage, release
    /// disengages.
    pub fn apply(&mut self, action: Action) {
        self.engaged = action.is_pressed();
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}
