//! Allocation-free text output helpers.

pub mod buffer;
pub mod hex;

pub use buffer::BoundedWriter;
pub use hex::{MacAddress, hex_digit, mac_string, write_hex_bytes, write_mac_hex};
