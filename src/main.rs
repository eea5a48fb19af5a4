//! WifiKeeper Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                  │
//! │  WifiRadio        LogStatusReporter    Esp32Time       │
//! │  (RadioPort)      (StatusReporter)     (clock)         │
//! │                                                        │
//! │  ───────────── Port Trait Boundary ─────────────       │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │     ConnectionMaintainer (pure logic)        │      │
//! │  │  grace window · retry interval · rotation    │      │
//! │  └──────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use core::fmt::Write;

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::EspWifi;
use log::{info, warn};

use wifikeeper::adapters::device_id;
use wifikeeper::adapters::log_sink::LogStatusReporter;
use wifikeeper::adapters::time::Esp32TimeAdapter;
use wifikeeper::adapters::wifi::WifiRadio;
use wifikeeper::config::{CredentialSet, MaintainerConfig};
use wifikeeper::output::{BoundedWriter, write_mac_hex};
use wifikeeper::ConnectionMaintainer;

/// Main loop period.  Well under the retry interval so attempts start on time.
const LOOP_PERIOD_MS: u32 = 100;

/// Networks baked in at build time, in priority order.
const BUILD_CREDENTIALS: [(Option<&str>, Option<&str>); 3] = [
    (option_env!("WIFI_SSID_1"), option_env!("WIFI_PASS_1")),
    (option_env!("WIFI_SSID_2"), option_env!("WIFI_PASS_2")),
    (option_env!("WIFI_SSID_3"), option_env!("WIFI_PASS_3")),
];

/// Collect the build-time networks.  A bad entry is logged and skipped so
/// the others still get tried.
fn build_time_credentials() -> CredentialSet {
    let mut set = CredentialSet::empty();
    for (ssid, pass) in BUILD_CREDENTIALS.iter().filter_map(|(s, p)| s.map(|s| (s, *p))) {
        if let Err(e) = set.push(ssid, pass.unwrap_or("")) {
            warn!("Skipping network '{}': {}", ssid, e);
        }
    }
    set
}

fn log_identity() {
    let mac = device_id::read_mac();
    let mut line = [0u8; 64];
    let mut w = BoundedWriter::new(&mut line);
    let _ = write!(w, "{} ({}) mac=", device_id::device_id(&mac), device_id::hostname(&mac));
    let _ = write_mac_hex(&mac, ":", &mut w);
    info!("Device {}", w.as_str().unwrap_or("?"));
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("WifiKeeper v{}", env!("CARGO_PKG_VERSION"));
    log_identity();

    // ── 2. Radio ──────────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let wifi = EspWifi::new(peripherals.modem, sysloop, Some(nvs))?;
    let radio = WifiRadio::new(wifi)?;

    // ── 3. Maintainer ─────────────────────────────────────────
    let credentials = build_time_credentials();
    info!("{} network(s) configured", credentials.len());
    for (i, c) in credentials.iter().enumerate() {
        info!("  [{}] '{}'{}", i, c.ssid(), if c.is_open() { " (open)" } else { "" });
    }
    let mut maintainer = ConnectionMaintainer::try_with_config(
        credentials,
        MaintainerConfig::default(),
        radio,
        LogStatusReporter::new(),
    )?;

    // ── 4. Main loop ──────────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    loop {
        maintainer.tick(clock.uptime_ms());
        FreeRtos::delay_ms(LOOP_PERIOD_MS);
    }
}
