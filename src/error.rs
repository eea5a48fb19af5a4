//! Unified error types for the WifiKeeper firmware.
//!
//! Every fallible setup step (credential parsing, config validation) funnels
//! into [`Error`].  The connection maintainer itself never fails: runtime
//! trouble is expressed through [`LinkStatus`](crate::app::status::LinkStatus)
//! values and log lines.  All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A credential pair was rejected while building the candidate list.
    Credential(CredentialError),
    /// Maintainer configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential(e) => write!(f, "credential: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Credential errors
// ---------------------------------------------------------------------------

/// Why a `(ssid, password)` pair could not join a
/// [`CredentialSet`](crate::config::CredentialSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// SSID must be 1-32 bytes with no NUL.
    InvalidSsid { index: usize },
    /// Password must be empty (open network) or 8-64 bytes.
    InvalidPassword { index: usize },
    /// More pairs than [`MAX_CREDENTIALS`](crate::config::MAX_CREDENTIALS).
    TooMany,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid { index } => {
                write!(f, "SSID #{index} invalid (must be 1-32 bytes with no NUL)")
            }
            Self::InvalidPassword { index } => write!(
                f,
                "password #{index} invalid (must be 8-64 bytes for WPA2, or empty for open)"
            ),
            Self::TooMany => write!(f, "too many networks configured"),
        }
    }
}

impl core::error::Error for CredentialError {}

impl From<CredentialError> for Error {
    fn from(e: CredentialError) -> Self {
        Self::Credential(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
