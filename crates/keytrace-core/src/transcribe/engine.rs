// Keytrace Transcription Layer - Translation Loop
// Drives classification, mapping, and buffered flushing over an event stream

use std::io::Write;

use log::{debug, trace};

use crate::cancel::CancelToken;
use crate::input::{
    is_key_event, is_nonshiftable_key, is_shift_key, EventSource, RawEvent, SourceError, EV_MAX,
};
use crate::keymap::{nonshiftable_glyph, shifted_glyph, unshifted_glyph, NEWLINE, UNKNOWN_KEY};

use super::buffer::TranscriptBuffer;
use super::shift::ShiftState;

/// Result type for transcription runs
pub type TranscribeResult<T> = Result<T, TranscribeError>;

/// Errors that abort a transcription run
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    /// An event type above EV_MAX cannot have come from a real input device.
    #[error("Received invalid keyboard events (type {0:#04x})")]
    MalformedStream(u16),

    #[error("Event source error: {0}")]
    Source(#[from] SourceError),

    #[error("Output error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Counters reported when a run terminates cleanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Raw events pulled from the source, key or otherwise
    pub events_seen: u64,
    /// Key presses translated into transcript bytes
    pub keys_translated: u64,
    /// Buffer drains that wrote at least one byte
    pub flushes: u64,
}

/// The translation loop: pulls raw events, tracks shift state, maps key
/// presses to bytes, and flushes the bounded buffer to the sink.
///
/// Termination via cancellation or source exhaustion drains the partial
/// buffer, appends one newline, and flushes the sink. Fatal errors (malformed
/// stream, source or sink I/O) abort without draining the pending tail; only
/// bytes already flushed at a capacity boundary survive on that path.
pub struct Transcriber<W: Write> {
    sink: W,
    cancel: CancelToken,
    shift: ShiftState,
    buffer: TranscriptBuffer,
    stats: RunStats,
}

impl<W: Write> Transcriber<W> {
    pub fn new(sink: W, cancel: CancelToken) -> Self {
        Self {
            sink,
            cancel,
            shift: ShiftState::new(),
            buffer: TranscriptBuffer::new(),
            stats: RunStats::default(),
        }
    }

    /// Use a smaller flush capacity. Exists for tests exercising the
    /// capacity-boundary behavior without feeding hundreds of events.
    pub fn with_flush_capacity(sink: W, cancel: CancelToken, capacity: usize) -> Self {
        Self {
            sink,
            cancel,
            shift: ShiftState::new(),
            buffer: TranscriptBuffer::with_capacity(capacity),
            stats: RunStats::default(),
        }
    }

    /// Consume events from `source` until it is exhausted or the token is
    /// cancelled, writing the transcript to the sink.
    pub fn run<S: EventSource>(&mut self, source: &mut S) -> TranscribeResult<RunStats> {
        loop {
            if self.cancel.is_cancelled() {
                debug!("cancellation observed, stopping collection");
                break;
            }

            let event = match source.next_event()? {
                Some(event) => event,
                None => {
                    debug!("event source exhausted");
                    break;
                }
            };
            self.stats.events_seen += 1;

            if !is_key_event(event.event_type) {
                if event.event_type > EV_MAX {
                    return Err(TranscribeError::MalformedStream(event.event_type));
                }
                trace!("ignoring non-key event type {:#04x}", event.event_type);
                continue;
            }

            self.handle_key_event(&event);

            if self.buffer.is_full() {
                self.drain()?;
            }
        }

        self.finish()?;
        Ok(self.stats)
    }

    fn handle_key_event(&mut self, event: &RawEvent) {
        let action = event.action();

        if is_shift_key(event.code) {
            self.shift.apply(action);
            return;
        }

        // Releases of ordinary keys produce nothing; presses and repeats both
        // translate, so a held key re-triggers like the kernel re-reports it.
        if !action.is_pressed() {
            return;
        }

        let glyph = if is_nonshiftable_key(event.code) {
            nonshiftable_glyph(event.code)
        } else if self.shift.is_engaged() {
            shifted_glyph(event.code)
        } else {
            unshifted_glyph(event.code)
        };

        if glyph == UNKNOWN_KEY {
            debug!("no mapping for key {} ({})", event.key(), event.code);
        }

        self.buffer.push(glyph);
        self.stats.keys_translated += 1;
    }

    fn drain(&mut self) -> std::io::Result<()> {
        let written = self.buffer.drain_into(&mut self.sink)?;
        if written > 0 {
            trace!("flushed {} bytes", written);
            self.stats.flushes += 1;
        }
        Ok(())
    }

    /// Shared termination path: drain the partial buffer, terminate the
    /// transcript with one newline, and force buffered writes out.
    fn finish(&mut self) -> std::io::Result<()> {
        self.drain()?;
        self.sink.write_all(&[NEWLINE])?;
        self.sink.flush()?;
        Ok(())
    }
}
