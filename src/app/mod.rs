//! Application core: pure connection-maintenance logic, zero I/O.
//!
//! All interaction with the WiFi driver and the hosting application happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without a radio.

pub mod maintainer;
pub mod ports;
pub mod status;
