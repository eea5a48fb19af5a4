//! Maintainer configuration and the candidate credential list.
//!
//! Tunables live in [`MaintainerConfig`]; the networks to try live in a
//! [`CredentialSet`], which is built once at startup and never changes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CredentialError};

/// Wait this long after an attempt before trying the next candidate.
pub const RETRY_INTERVAL_MS: u32 = 10_000;

/// Upper bound on configured networks (stack-allocated).
pub const MAX_CREDENTIALS: usize = 8;

pub const SSID_MAX_LEN: usize = 32;
pub const PASSWORD_MAX_LEN: usize = 64;
const PASSWORD_MIN_LEN: usize = 8;

// ───────────────────────────────────────────────────────────────
// MaintainerConfig
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainerConfig {
    /// Minimum time between two connection attempts (milliseconds).
    pub retry_interval_ms: u32,
}

impl Default for MaintainerConfig {
    fn default() -> Self {
        Self {
            retry_interval_ms: RETRY_INTERVAL_MS,
        }
    }
}

impl MaintainerConfig {
    /// Reject values that would make the maintainer retry on every tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "retry_interval_ms must be non-zero",
            ));
        }
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Credentials
// ───────────────────────────────────────────────────────────────

// 802.11 allows any 1..=32 octets; NUL would truncate the driver's C string.
fn is_valid_ssid(s: &str) -> bool {
    !s.is_empty() && s.len() <= SSID_MAX_LEN && !s.bytes().any(|b| b == 0)
}

/// One network the maintainer may try.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    ssid: heapless::String<SSID_MAX_LEN>,
    password: heapless::String<PASSWORD_MAX_LEN>,
}

impl Credential {
    /// Validate and copy a pair.  `index` only labels the error.
    fn parse(index: usize, ssid: &str, password: &str) -> Result<Self, CredentialError> {
        if !is_valid_ssid(ssid) {
            return Err(CredentialError::InvalidSsid { index });
        }
        if !password.is_empty()
            && !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password.len())
        {
            return Err(CredentialError::InvalidPassword { index });
        }

        let mut c = Self {
            ssid: heapless::String::new(),
            password: heapless::String::new(),
        };
        c.ssid
            .push_str(ssid)
            .map_err(|()| CredentialError::InvalidSsid { index })?;
        c.password
            .push_str(password)
            .map_err(|()| CredentialError::InvalidPassword { index })?;
        Ok(c)
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}

// Passwords stay out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Ordered, immutable list of candidate networks.
///
/// Index order is significant: rotation walks it forward and wraps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSet {
    entries: heapless::Vec<Credential, MAX_CREDENTIALS>,
}

impl CredentialSet {
    /// An empty set.  The maintainer will never attempt a connection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from ordered `(ssid, password)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, CredentialError> {
        if pairs.len() > MAX_CREDENTIALS {
            return Err(CredentialError::TooMany);
        }
        let mut set = Self::empty();
        for (ssid, password) in pairs {
            set.push(ssid, password)?;
        }
        Ok(set)
    }

    /// Append one network at the end of the rotation.  On error the set is
    /// left unchanged, so callers can skip a bad entry and keep going.
    pub fn push(&mut self, ssid: &str, password: &str) -> Result<(), CredentialError> {
        let c = Credential::parse(self.entries.len(), ssid, password)?;
        self.entries.push(c).map_err(|_| CredentialError::TooMany)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.entries.iter()
    }
}
