// Keytrace Input Layer - Raw Events
// The three-field event tuple and event-type checks

use crate::action::Action;
use crate::key::Key;

/// EV_KEY event type code from linux/input-event-codes.h
pub const EV_KEY: u16 = 0x01;

/// Highest event type the kernel defines (EV_MAX from
/// linux/input-event-codes.h). Anything above this cannot have come from a
/// real input device and marks the stream as malformed.
pub const EV_MAX: u16 = 0x1f;

/// Check if an event type denotes a key event.
pub fn is_key_event(event_type: u16) -> bool {
    event_type == EV_KEY
}

/// One hardware input notification, reduced to the fields the transcriber
/// consumes. Timestamps are dropped at the read boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    /// Event class (EV_KEY, EV_SYN, EV_MSC, ...)
    pub event_type: u16,
    /// Physical key identifier for EV_KEY events
    pub code: u16,
    /// 0 = released, 1 = pressed, 2 = repeated
    pub value: i32,
}

impl RawEvent {
    pub fn new(event_type: u16, code: u16, value: i32) -> Self {
        Self {
            event_type,
            code,
            value,
        }
    }

    pub fn is_key_event(&self) -> bool {
        is_key_event(self.event_type)
    }

    pub fn key(&self) -> Key {
        Key::new(self.code)
    }

    pub fn action(&self) -> Action {
        Action::from_value(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key_event_with_ev_key() {
        assert!(is_key_event(EV_KEY));
        assert!(RawEvent::new(EV_KEY, 30, 1).is_key_event());
    }

    #[test]
    fn test_is_key_event_with_other_event() {
        assert!(!is_key_event(0x00)); // EV_SYN
        assert!(!is_key_event(0x02)); // EV_REL
        assert!(!is_key_event(0x04)); // EV_MSC
    }

    #[test]
    fn test_event_accessors() {
        let event = RawEvent::new(EV_KEY, 30, 2);
        assert_eq!(event.key(), Key::new(30));
        assert_eq!(event.action(), Action::Repeat);
    }

    #[test]
    fn test_ev_constants() {
        // From linux/input-event-codes.h
        assert_eq!(EV_KEY, 0x01);
        assert_eq!(EV_MAX, 0x1f);
    }
}
