// Keytrace Core Library
// Event-to-character translation engine for keystroke transcription

pub mod action;
pub mod cancel;
pub mod input;
pub mod key;
pub mod keymap;
pub mod transcribe;

pub use action::Action;
pub use cancel::CancelToken;
pub use input::{
    is_key_event, is_nonshiftable_key, is_shift_key, list_keyboards, DeviceError, DeviceInfo,
    DeviceReader, EventSource, RawEvent, SourceError, SourceResult, EV_KEY, EV_MAX,
};
pub use key::Key;
pub use keymap::{
    nonshiftable_glyph, shifted_glyph, unshifted_glyph, BACKSPACE_MARKER, NEWLINE, UNKNOWN_KEY,
};
pub use transcribe::{
    RunStats, ShiftState, TranscribeError, TranscribeResult, Transcriber, TranscriptBuffer,
    FLUSH_CAPACITY,
};
