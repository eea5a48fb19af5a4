//! Port traits: the hexagonal boundary between the maintainer and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ConnectionMaintainer (domain)
//! ```
//!
//! The radio adapter and the status reporter implement these traits.  The
//! [`ConnectionMaintainer`](super::maintainer::ConnectionMaintainer) owns
//! them via generics, so the domain core never touches the WiFi driver
//! directly and can be driven by mocks on the host.

use crate::config::SSID_MAX_LEN;

use super::status::LinkStatus;

// ───────────────────────────────────────────────────────────────
// Radio port (driven adapter: domain ↔ WiFi driver)
// ───────────────────────────────────────────────────────────────

/// Station-mode radio control.
///
/// Calls must return promptly: they run inside the maintainer's tick,
/// which shares the main loop with everything else on the device.
pub trait RadioPort {
    /// Current link status as the driver sees it.
    fn status(&mut self) -> LinkStatus;

    /// Start associating with `ssid`.  Fire-and-forget: the outcome shows
    /// up in later [`status`](Self::status) reads.  A new call supersedes
    /// any attempt still in flight.
    fn begin(&mut self, ssid: &str, password: &str);

    /// SSID the driver will reconnect to on its own (e.g. restored from
    /// flash).  Only used for diagnostics.
    fn current_ssid(&self) -> heapless::String<SSID_MAX_LEN>;
}

// ───────────────────────────────────────────────────────────────
// Status reporter (driven adapter: domain → application)
// ───────────────────────────────────────────────────────────────

/// Receives every observed link-status transition, exactly once each.
pub trait StatusReporter {
    fn on_status_changed(&mut self, status: LinkStatus);
}

/// Plain callbacks work as reporters.
impl<F> StatusReporter for F
where
    F: FnMut(LinkStatus),
{
    fn on_status_changed(&mut self, status: LinkStatus) {
        self(status);
    }
}
