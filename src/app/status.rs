//! Link status as reported by the radio driver.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Station link status.
///
/// Raw codes follow the classic `wl_status_t` numbering so drivers that
/// speak it can map with [`LinkStatus::from_raw`].  Anything else becomes
/// [`LinkStatus::Unknown`], which the maintainer treats like any other
/// non-connected status.
///
/// `Unknown` is meant to hold codes above 7 only.  A value built directly
/// as `Unknown(0..=7)` is folded back onto its named variant by
/// [`LinkStatus::canonical`], which the maintainer applies to every
/// reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkStatus {
    Idle,
    NoSsidAvailable,
    ScanCompleted,
    Connected,
    ConnectFailed,
    ConnectionLost,
    WrongPassword,
    Disconnected,
    Unknown(u8),
}

impl LinkStatus {
    /// Same status with `Unknown(0..=7)` mapped to its named variant.
    pub const fn canonical(self) -> Self {
        Self::from_raw(self.raw())
    }

    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::NoSsidAvailable,
            2 => Self::ScanCompleted,
            3 => Self::Connected,
            4 => Self::ConnectFailed,
            5 => Self::ConnectionLost,
            6 => Self::WrongPassword,
            7 => Self::Disconnected,
            other => Self::Unknown(other),
        }
    }

    pub const fn raw(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::NoSsidAvailable => 1,
            Self::ScanCompleted => 2,
            Self::Connected => 3,
            Self::ConnectFailed => 4,
            Self::ConnectionLost => 5,
            Self::WrongPassword => 6,
            Self::Disconnected => 7,
            Self::Unknown(other) => other,
        }
    }

    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Statuses that indicate the last attempt went wrong, as opposed to
    /// "nothing happening yet".
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::NoSsidAvailable
                | Self::ConnectFailed
                | Self::ConnectionLost
                | Self::WrongPassword
                | Self::Unknown(_)
        )
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::NoSsidAvailable => write!(f, "no SSID available"),
            Self::ScanCompleted => write!(f, "scan completed"),
            Self::Connected => write!(f, "connected"),
            Self::ConnectFailed => write!(f, "connect failed"),
            Self::ConnectionLost => write!(f, "connection lost"),
            Self::WrongPassword => write!(f, "wrong password"),
            Self::Disconnected => write!(f, "disconnected"),
            Self::Unknown(raw) => write!(f, "unknown ({raw})"),
        }
    }
}
