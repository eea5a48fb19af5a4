//! WifiKeeper firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod output;

pub mod adapters;

pub use app::maintainer::{ConnectionMaintainer, MaintainerState};
pub use app::ports::{RadioPort, StatusReporter};
pub use app::status::LinkStatus;
pub use config::{Credential, CredentialSet, MaintainerConfig};
