//! Maintainer driving the host simulation of the WiFi adapter.

#![cfg(not(target_os = "espidf"))]

use wifikeeper::adapters::log_sink::LogStatusReporter;
use wifikeeper::adapters::wifi::WifiRadio;
use wifikeeper::app::ports::RadioPort;
use wifikeeper::app::status::LinkStatus;
use wifikeeper::config::CredentialSet;
use wifikeeper::ConnectionMaintainer;

fn sim(reachable: &[&str]) -> ConnectionMaintainer<WifiRadio, LogStatusReporter> {
    let creds =
        CredentialSet::from_pairs(&[("Office", "password1"), ("Home", "password2"), ("Cafe", "")])
            .unwrap();
    ConnectionMaintainer::new(creds, WifiRadio::simulated(reachable), LogStatusReporter::new())
}

#[test]
fn finds_the_reachable_network() {
    let mut m = sim(&["Cafe"]);
    let mut t = 0;
    while m.tick(t) != LinkStatus::Connected {
        t += 1_000;
        assert!(t < 120_000, "never connected");
    }
    // Grace at 0, Home at 10s, Cafe at 20s; connected seen on the next tick.
    assert_eq!(m.radio().begin_count(), 2);
    assert_eq!(m.state().last_successful(), Some(2));
    assert_eq!(m.radio().current_ssid().as_str(), "Cafe");
}

#[test]
fn recovers_after_link_drop() {
    let mut m = sim(&["Home"]);
    let mut t = 0;
    while m.tick(t) != LinkStatus::Connected {
        t += 1_000;
    }
    assert_eq!(m.state().last_successful(), Some(1));

    m.radio_mut().drop_link();
    let dropped_at = t;
    while m.tick(t) != LinkStatus::Connected {
        t += 1_000;
        assert!(t - dropped_at < 120_000, "never reconnected");
    }
    assert_eq!(m.state().last_successful(), Some(1));
    assert!(m.reporter().transitions() >= 4);
}

#[test]
fn nothing_reachable_keeps_trying() {
    let mut m = sim(&[]);
    for k in 0..=10 {
        assert_ne!(m.tick(k * 10_000), LinkStatus::Connected);
    }
    assert_eq!(m.radio().begin_count(), 10);
    assert_eq!(m.state().failure_count(), 10);
}
