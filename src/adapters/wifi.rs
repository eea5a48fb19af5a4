//! WiFi station-mode adapter.
//!
//! Implements [`RadioPort`]: the hexagonal boundary for the radio.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver calls via `esp_idf_svc::wifi`.
//! - **all other targets**: an in-memory simulation for host-side tests and demos.
//!
//! The adapter never retries or rotates on its own; that policy belongs to
//! the [`ConnectionMaintainer`](crate::app::maintainer::ConnectionMaintainer).

use log::{info, warn};

use crate::app::ports::RadioPort;
use crate::app::status::LinkStatus;
use crate::config::SSID_MAX_LEN;
#[cfg(not(target_os = "espidf"))]
use crate::config::MAX_CREDENTIALS;

#[cfg(target_os = "espidf")]
use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi};

type Ssid = heapless::String<SSID_MAX_LEN>;

fn ssid_of(s: &str) -> Ssid {
    let mut out = Ssid::new();
    // Inputs come from a validated CredentialSet; overlong ones are dropped.
    let _ = out.push_str(s);
    out
}

// ───────────────────────────────────────────────────────────────
// WiFi adapter
// ───────────────────────────────────────────────────────────────

pub struct WifiRadio {
    #[cfg(target_os = "espidf")]
    wifi: EspWifi<'static>,
    #[cfg(target_os = "espidf")]
    attempted: bool,

    /// Simulation: SSIDs that accept a connection.
    #[cfg(not(target_os = "espidf"))]
    reachable: heapless::Vec<Ssid, MAX_CREDENTIALS>,
    /// Simulation: network the driver is associated with or trying to reach.
    #[cfg(not(target_os = "espidf"))]
    target: Option<Ssid>,
    #[cfg(not(target_os = "espidf"))]
    status: LinkStatus,
    #[cfg(not(target_os = "espidf"))]
    begin_count: u32,
}

#[cfg(target_os = "espidf")]
impl WifiRadio {
    /// Start the station driver.  If flash already holds a client config,
    /// kick off a connection to it so the maintainer's grace window has
    /// something to wait for.
    pub fn new(mut wifi: EspWifi<'static>) -> Result<Self, esp_idf_svc::sys::EspError> {
        let stored = match wifi.get_configuration()? {
            Configuration::Client(c) => Some(c),
            _ => None,
        };
        if stored.is_none() {
            wifi.set_configuration(&Configuration::Client(ClientConfiguration::default()))?;
        }
        wifi.start()?;

        let mut attempted = false;
        if let Some(c) = stored.filter(|c| !c.ssid.is_empty()) {
            info!("WiFi(espidf): resuming stored network '{}'", c.ssid);
            if let Err(e) = wifi.connect() {
                warn!("WiFi(espidf): stored-config connect failed: {}", e);
            }
            attempted = true;
        }
        Ok(Self { wifi, attempted })
    }
}

#[cfg(not(target_os = "espidf"))]
impl WifiRadio {
    /// Simulated radio where only `reachable` SSIDs ever connect.
    pub fn simulated(reachable: &[&str]) -> Self {
        let mut r = heapless::Vec::new();
        for ssid in reachable.iter().take(MAX_CREDENTIALS) {
            let _ = r.push(ssid_of(ssid));
        }
        Self {
            reachable: r,
            target: None,
            status: LinkStatus::Disconnected,
            begin_count: 0,
        }
    }

    /// Simulation: the access point went away.
    pub fn drop_link(&mut self) {
        if self.status == LinkStatus::Connected {
            warn!("WiFi(sim): link dropped");
            self.status = LinkStatus::ConnectionLost;
        }
    }

    /// Simulation: how many times `begin` has been called.
    pub fn begin_count(&self) -> u32 {
        self.begin_count
    }
}

// ───────────────────────────────────────────────────────────────
// RadioPort
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
impl RadioPort for WifiRadio {
    fn status(&mut self) -> LinkStatus {
        match self.wifi.is_connected() {
            Ok(true) => LinkStatus::Connected,
            Ok(false) if !self.wifi.is_started().unwrap_or(false) => LinkStatus::Idle,
            Ok(false) if self.attempted => LinkStatus::Disconnected,
            Ok(false) => LinkStatus::Idle,
            Err(e) => {
                warn!("WiFi(espidf): status query failed: {}", e);
                LinkStatus::Unknown(u8::MAX)
            }
        }
    }

    fn begin(&mut self, ssid: &str, password: &str) {
        let config = ClientConfiguration {
            ssid: ssid_of(ssid),
            password: password.try_into().unwrap_or_default(),
            auth_method: if password.is_empty() {
                AuthMethod::None
            } else {
                AuthMethod::WPA2Personal
            },
            ..Default::default()
        };
        // A new attempt supersedes whatever the driver is still doing.
        let _ = self.wifi.disconnect();
        if let Err(e) = self.wifi.set_configuration(&Configuration::Client(config)) {
            warn!("WiFi(espidf): set_configuration failed: {}", e);
            return;
        }
        if let Err(e) = self.wifi.connect() {
            warn!("WiFi(espidf): connect to '{}' failed: {}", ssid, e);
        }
        self.attempted = true;
    }

    fn current_ssid(&self) -> Ssid {
        match self.wifi.get_configuration() {
            Ok(Configuration::Client(c)) => c.ssid,
            _ => Ssid::new(),
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl RadioPort for WifiRadio {
    fn status(&mut self) -> LinkStatus {
        self.status
    }

    fn begin(&mut self, ssid: &str, _password: &str) {
        self.begin_count = self.begin_count.wrapping_add(1);
        let ssid = ssid_of(ssid);
        self.status = if self.reachable.contains(&ssid) {
            info!("WiFi(sim): associated with '{}'", ssid);
            LinkStatus::Connected
        } else {
            warn!("WiFi(sim): '{}' not in range", ssid);
            LinkStatus::NoSsidAvailable
        };
        self.target = Some(ssid);
    }

    fn current_ssid(&self) -> Ssid {
        self.target.clone().unwrap_or_default()
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
