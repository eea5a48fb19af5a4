//! Log-based status reporter adapter.
//!
//! Implements [`StatusReporter`] by writing link transitions to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A future MQTT or LED adapter would implement the same trait.

use log::{info, warn};

use crate::app::ports::StatusReporter;
use crate::app::status::LinkStatus;

/// Adapter that logs every [`LinkStatus`] transition to the serial console.
#[derive(Debug, Default)]
pub struct LogStatusReporter {
    transitions: u32,
}

impl LogStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions seen since boot.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl StatusReporter for LogStatusReporter {
    fn on_status_changed(&mut self, status: LinkStatus) {
        self.transitions = self.transitions.wrapping_add(1);
        if status.is_failure() {
            warn!("LINK | {} (raw={})", status, status.raw());
        } else {
            info!("LINK | {} (raw={})", status, status.raw());
        }
    }
}
