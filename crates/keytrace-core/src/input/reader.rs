// Keytrace Input Layer - Device Reader
// Blocking evdev event source with prompt cancellation

use std::collections::VecDeque;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use evdev::Device;
use log::debug;

use crate::cancel::CancelToken;

use super::event::RawEvent;
use super::source::{EventSource, SourceError, SourceResult};

/// Poll timeout between cancellation checks while no events are pending.
const POLL_TIMEOUT_MS: i32 = 100;

/// Event source backed by an evdev keyboard device.
///
/// Reads are effectively blocking: the reader waits on the device fd until
/// data arrives, re-checking its [`CancelToken`] every poll timeout so Ctrl+C
/// ends the wait without requiring another keystroke. A batch fetched from
/// the kernel is queued and handed out one event per [`next_event`] call.
///
/// [`next_event`]: EventSource::next_event
pub struct DeviceReader {
    device: Device,
    pending: VecDeque<RawEvent>,
    cancel: CancelToken,
}

impl DeviceReader {
    /// Open the device at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P, cancel: CancelToken) -> SourceResult<Self> {
        let device = Device::open(path.as_ref())?;
        debug!(
            "opened device {} ({})",
            path.as_ref().display(),
            device.name().unwrap_or("Unknown")
        );
        Ok(Self {
            device,
            pending: VecDeque::new(),
            cancel,
        })
    }

    /// Name reported by the device, for startup logging.
    pub fn device_name(&self) -> &str {
        self.device.name().unwrap_or("Unknown")
    }

    /// Wait until the device fd is readable or the timeout elapses.
    ///
    /// EINTR is not a fatal error - it just means a signal was delivered
    /// (e.g. Ctrl+C). It is treated like a timeout; the caller re-checks the
    /// cancellation token and waits again if the run should continue.
    fn wait_readable(&mut self, timeout_ms: i32) -> SourceResult<bool> {
        let mut poll_fd = libc::pollfd {
            fd: self.device.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };

        let poll_result = unsafe { libc::poll(&mut poll_fd, 1, timeout_ms) };

        if poll_result < 0 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::EINTR) {
                return Ok(false);
            }
            return Err(SourceError::Io(err));
        }

        Ok(poll_result > 0 && poll_fd.revents & libc::POLLIN != 0)
    }
}

impl EventSource for DeviceReader {
    fn next_event(&mut self) -> SourceResult<Option<RawEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            if self.cancel.is_cancelled() {
                return Ok(None);
            }

            if self.wait_readable(POLL_TIMEOUT_MS)? {
                let events = self.device.fetch_events()?;
                for event in events {
                    self.pending.push_back(RawEvent::new(
                        event.event_type().0,
                        event.code(),
                        event.value(),
                    ));
                }
            }
        }
    }
}
