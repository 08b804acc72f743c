// Keytrace Input Layer - Device Detection
// Keyboard capability heuristic and device listing for --list-devices

use evdev::{Device, EventType, Key as EvKey};

// QWERTY row key codes: Q, W, E, R, T, Y
const QWERTY_CODES: &[u16] = &[16, 17, 18, 19, 20, 21];

// Representative A-Z and SPACE codes for keyboard detection
const A_Z_SPACE_CODES: &[u16] = &[57, 30, 44]; // SPACE, A, Z

/// Errors that can occur while enumerating input devices
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("No keyboard devices found")]
    NoKeyboards,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Device information for listing devices
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Device index
    pub index: usize,
    /// Device name
    pub name: String,
    /// Device path (if available)
    pub path: Option<String>,
}

/// Determine if a device looks like a keyboard.
///
/// A device qualifies if it supports EV_KEY events, carries the full QWERTY
/// row (Q, W, E, R, T, Y), and carries the representative A, Z and SPACE
/// keys. Mice and media-button devices report EV_KEY too but fail the
/// letter-row check.
pub fn is_keyboard(device: &Device) -> bool {
    if !device.supported_events().contains(EventType::KEY) {
        return false;
    }

    let keys = match device.supported_keys() {
        Some(k) => k,
        None => return false,
    };

    let qwerty_present = QWERTY_CODES
        .iter()
        .all(|code| keys.contains(EvKey::new(*code)));
    let az_present = A_Z_SPACE_CODES
        .iter()
        .all(|code| keys.contains(EvKey::new(*code)));

    qwerty_present && az_present
}

/// List all keyboard-capable input devices.
///
/// This backs the --list-devices CLI flag.
pub fn list_keyboards() -> Result<Vec<DeviceInfo>, DeviceError> {
    let mut devices_info = Vec::new();
    let mut index = 0;

    for (path, device) in evdev::enumerate() {
        if is_keyboard(&device) {
            let name = device.name().unwrap_or("Unknown").to_string();
            let device_path = path.to_str().map(|s| s.to_string());
            devices_info.push(DeviceInfo {
                index,
                name,
                path: device_path,
            });
            index += 1;
        }
    }

    if devices_info.is_empty() {
        return Err(DeviceError::NoKeyboards);
    }

    Ok(devices_info)
}
