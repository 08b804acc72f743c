// Keytrace Transcription Layer
// Shift tracking, bounded buffering, and the event translation loop

pub mod buffer;
pub mod engine;
pub mod shift;

pub use buffer::{TranscriptBuffer, FLUSH_CAPACITY};
pub use engine::{RunStats, TranscribeError, TranscribeResult, Transcriber};
pub use shift::ShiftState;
