//! Connection maintainer: keeps the station link up.
//!
//! [`ConnectionMaintainer::tick`] is called from the main loop.  Each call
//! reads the link status, reports transitions, and when the link has been
//! down for a full retry interval, starts an attempt on the next candidate.
//!
//! ```text
//!   first tick, Disconnected ──▶ grace window (let the driver reconnect
//!                                 from its stored config)
//!   not Connected for ≥ retry  ──▶ failure_count += 1
//!                                 attempt (base + failure_count) mod N
//!   transition into Connected  ──▶ failure_count = 0
//!                                 last_successful = last_attempted
//! ```
//!
//! Nothing here blocks or sleeps, and nothing is ever abandoned: the cycle
//! runs for the lifetime of the device.

use log::{info, warn};

use crate::config::{CredentialSet, MaintainerConfig};

use super::ports::{RadioPort, StatusReporter};
use super::status::LinkStatus;

// ───────────────────────────────────────────────────────────────
// State
// ───────────────────────────────────────────────────────────────

/// Everything the maintainer remembers between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintainerState {
    last_reported_status: Option<LinkStatus>,
    last_attempted: Option<usize>,
    last_successful: Option<usize>,
    failure_count: u32,
    last_attempt_ms: Option<i64>,
}

impl MaintainerState {
    /// Last status handed to the reporter.  `None` before the first tick.
    pub fn last_reported_status(&self) -> Option<LinkStatus> {
        self.last_reported_status
    }

    /// Candidate chosen by the most recent attempt.
    pub fn last_attempted(&self) -> Option<usize> {
        self.last_attempted
    }

    /// Candidate that was being tried when the link last came up.
    pub fn last_successful(&self) -> Option<usize> {
        self.last_successful
    }

    /// Retry cycles since the link was last observed coming up.
    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    /// When the last attempt (or the grace window) started.
    pub fn last_attempt_ms(&self) -> Option<i64> {
        self.last_attempt_ms
    }
}

// ───────────────────────────────────────────────────────────────
// ConnectionMaintainer
// ───────────────────────────────────────────────────────────────

pub struct ConnectionMaintainer<R, S> {
    credentials: CredentialSet,
    config: MaintainerConfig,
    radio: R,
    reporter: S,
    state: MaintainerState,
}

impl<R: RadioPort, S: StatusReporter> ConnectionMaintainer<R, S> {
    /// Maintainer with the default 10 s retry interval.
    pub fn new(credentials: CredentialSet, radio: R, reporter: S) -> Self {
        Self::with_config(credentials, MaintainerConfig::default(), radio, reporter)
    }

    pub fn with_config(
        credentials: CredentialSet,
        config: MaintainerConfig,
        radio: R,
        reporter: S,
    ) -> Self {
        Self {
            credentials,
            config,
            radio,
            reporter,
            state: MaintainerState::default(),
        }
    }

    /// [`with_config`](Self::with_config), rejecting an invalid config.
    pub fn try_with_config(
        credentials: CredentialSet,
        config: MaintainerConfig,
        radio: R,
        reporter: S,
    ) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self::with_config(credentials, config, radio, reporter))
    }

    // ── Per-tick decision ─────────────────────────────────────

    /// Run one maintenance step at `now_ms` and return the status seen.
    ///
    /// `now_ms` must not go backwards.  Elapsed time is computed with
    /// wrapping subtraction, so a wrapping timer is handled as well as the
    /// timer itself allows.
    pub fn tick(&mut self, now_ms: i64) -> LinkStatus {
        let status = self.radio.status().canonical();

        if self.state.last_reported_status != Some(status) {
            self.reporter.on_status_changed(status);
            self.state.last_reported_status = Some(status);
            if status.is_connected() {
                self.state.failure_count = 0;
                if let Some(index) = self.state.last_attempted {
                    self.state.last_successful = Some(index);
                }
            }
        }

        // The driver may still reconnect from its stored config.  Give it
        // one retry interval before stepping in.
        if status == LinkStatus::Disconnected && self.state.last_attempt_ms.is_none() {
            self.state.last_attempt_ms = Some(now_ms);
            info!(
                "WiFi: waiting to see if the radio reconnects to '{}' on its own",
                self.radio.current_ssid()
            );
            return status;
        }

        if !status.is_connected() && self.retry_due(now_ms) {
            self.state.failure_count = self.state.failure_count.saturating_add(1);
            info!("WiFi: connection attempt {}", self.state.failure_count);
            self.attempt(now_ms);
        }

        status
    }

    /// Candidate for the next attempt, or `None` if nothing is configured.
    ///
    /// Starts from the last network that worked (or the first one) and
    /// moves one step forward per failed cycle, wrapping around.
    pub fn pick_candidate(&self) -> Option<usize> {
        let n = self.credentials.len();
        if n == 0 {
            return None;
        }
        let base = self.state.last_successful.unwrap_or(0);
        Some((base + self.state.failure_count as usize % n) % n)
    }

    fn retry_due(&self, now_ms: i64) -> bool {
        match self.state.last_attempt_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= i64::from(self.config.retry_interval_ms),
        }
    }

    fn attempt(&mut self, now_ms: i64) {
        let index = self.pick_candidate();
        match index.and_then(|i| self.credentials.get(i)) {
            Some(c) => {
                if c.is_open() {
                    info!("WiFi: attempting to connect to '{}' (open)", c.ssid());
                } else {
                    info!("WiFi: attempting to connect to '{}'", c.ssid());
                }
                self.radio.begin(c.ssid(), c.password());
            }
            None => warn!("WiFi: no networks configured"),
        }
        self.state.last_attempted = index;
        self.state.last_attempt_ms = Some(now_ms);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &MaintainerState {
        &self.state
    }

    pub fn config(&self) -> &MaintainerConfig {
        &self.config
    }

    pub fn credentials(&self) -> &CredentialSet {
        &self.credentials
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    pub fn reporter(&self) -> &S {
        &self.reporter
    }

    /// Tear down and hand the collaborators back.
    pub fn into_parts(self) -> (R, S) {
        (self.radio, self.reporter)
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
