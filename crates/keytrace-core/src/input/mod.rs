// Keytrace Input Layer
// Raw event shape, keycode classification, and the evdev device backend

pub mod classify;
pub mod device;
pub mod event;
pub mod reader;
pub mod source;

pub use classify::{is_nonshiftable_key, is_shift_key};
pub use device::{list_keyboards, DeviceError, DeviceInfo};
pub use event::{is_key_event, RawEvent, EV_KEY, EV_MAX};
pub use reader::DeviceReader;
pub use source::{EventSource, SourceError, SourceResult};
