//! Device identity derived from the ESP32 factory MAC address.
//!
//! Produces a stable, human-readable device ID in the form `WK-XXYYZZ`
//! (last 3 bytes of the 6-byte MAC in uppercase hex). It is
//! deterministic across reboots (factory-burned eFuse MAC) and is printed
//! in the boot banner next to the full station MAC.

use core::fmt::Write;

use crate::output::hex::{MacAddress, write_hex_bytes};

/// Fixed-size device ID string: "WK-XXYYZZ".
pub type DeviceIdString = heapless::String<16>;

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
}

/// Derive the short device ID from the last 3 MAC bytes.
/// Format: `WK-XXYYZZ` (e.g., `WK-EFCAFE`).
pub fn device_id(mac: &MacAddress) -> DeviceIdString {
    let mut id = DeviceIdString::new();
    let _ = id.push_str("WK-");
    let _ = write_hex_bytes(&mac[3..], "", &mut id);
    id
}

/// Derive the DHCP hostname from the last 3 MAC bytes.
/// Format: `wifikeeper-xxyyzz` (lowercase).
pub fn hostname(mac: &MacAddress) -> heapless::String<24> {
    let mut name = heapless::String::<24>::new();
    let _ = write!(name, "wifikeeper-{:02x}{:02x}{:02x}", mac[3], mac[4], mac[5]);
    name
}
