//! Integration tests for the maintainer → radio → reporter pipeline.
//!
//! These drive `tick` with explicit timestamps and scripted link statuses
//! and check which networks the radio was asked to join.

use crate::mock_radio::{MockRadio, RecordingReporter, maintainer, tick_with};

use wifikeeper::app::status::LinkStatus::{self, Connected, ConnectFailed, Disconnected, Idle};
use wifikeeper::config::{CredentialSet, MaintainerConfig};
use wifikeeper::ConnectionMaintainer;

// ── End-to-end: two networks, no prior success ───────────────

#[test]
fn two_network_walkthrough() {
    let mut m = maintainer(&[("A", "password-a"), ("B", "password-b")]);

    // t=0: grace window, nothing attempted.
    assert_eq!(tick_with(&mut m, 0, Disconnected), Disconnected);
    assert!(m.radio().begins.is_empty());

    // t=10000: first failure, rotation starts one past base 0.
    tick_with(&mut m, 10_000, Disconnected);
    assert_eq!(m.state().failure_count(), 1);
    assert_eq!(m.radio().last_ssid(), Some("B"));
    assert_eq!(m.radio().begins[0].password, "password-b");

    // t=20000: second failure wraps back to A.
    tick_with(&mut m, 20_000, Disconnected);
    assert_eq!(m.state().failure_count(), 2);
    assert_eq!(m.radio().last_ssid(), Some("A"));

    // t=20001: link comes up on A.
    assert_eq!(tick_with(&mut m, 20_001, Connected), Connected);
    assert_eq!(m.state().last_successful(), Some(0));
    assert_eq!(m.state().failure_count(), 0);
    assert_eq!(m.reporter().reports, vec![Disconnected, Connected]);
}

// ── Startup grace window ─────────────────────────────────────

#[test]
fn grace_window_waits_a_full_interval() {
    let mut m = maintainer(&[("A", "")]);
    m.radio_mut().stored_ssid = "Saved";

    tick_with(&mut m, 1_000, Disconnected);
    for t in [1_001, 5_000, 10_999] {
        tick_with(&mut m, t, Disconnected);
    }
    assert!(m.radio().begins.is_empty());
    assert_eq!(m.state().last_attempt_ms(), Some(1_000));

    tick_with(&mut m, 11_000, Disconnected);
    assert_eq!(m.radio().begins.len(), 1);
}

#[test]
fn stored_config_reconnect_needs_no_attempt() {
    let mut m = maintainer(&[("A", ""), ("B", "")]);
    tick_with(&mut m, 0, Disconnected);
    tick_with(&mut m, 3_000, Connected);
    tick_with(&mut m, 60_000, Connected);

    assert!(m.radio().begins.is_empty());
    // Nothing was attempted, so there is no candidate to credit.
    assert_eq!(m.state().last_successful(), None);
}

// ── Status reporting ─────────────────────────────────────────

#[test]
fn reports_transitions_not_levels() {
    let mut m = maintainer(&[("A", "")]);
    let script = [
        Disconnected,
        Disconnected,
        Idle,
        Idle,
        Connected,
        Connected,
        Connected,
        Disconnected,
    ];
    for (i, s) in script.iter().enumerate() {
        tick_with(&mut m, i as i64 * 100, *s);
    }
    assert_eq!(
        m.reporter().reports,
        vec![Disconnected, Idle, Connected, Disconnected]
    );
    assert_eq!(m.radio().status_reads, script.len() as u32);
}

#[test]
fn first_status_always_reported() {
    let mut m = maintainer(&[("A", "")]);
    assert_eq!(m.state().last_reported_status(), None);
    tick_with(&mut m, 0, Idle);
    assert_eq!(m.reporter().reports, vec![Idle]);
    assert_eq!(m.state().last_reported_status(), Some(Idle));
}

// ── Failure handling ─────────────────────────────────────────

#[test]
fn unknown_status_counts_as_failure() {
    let mut m = maintainer(&[("A", ""), ("B", ""), ("C", "")]);
    let weird = LinkStatus::from_raw(200);
    tick_with(&mut m, 0, weird);
    tick_with(&mut m, 10_000, weird);
    tick_with(&mut m, 20_000, weird);
    assert_eq!(m.radio().attempted_ssids(), vec!["B", "C", "A"]);
    assert_eq!(m.state().failure_count(), 3);
}

#[test]
fn connect_failed_keeps_rotating_forever() {
    let mut m = maintainer(&[("A", ""), ("B", "")]);
    tick_with(&mut m, 0, Disconnected);
    for k in 1..=50i64 {
        tick_with(&mut m, k * 10_000, ConnectFailed);
    }
    assert_eq!(m.radio().begins.len(), 50);
    assert_eq!(m.state().failure_count(), 50);
}

#[test]
fn no_attempt_faster_than_retry_interval() {
    let mut m = maintainer(&[("A", ""), ("B", "")]);
    tick_with(&mut m, 0, Idle);
    for t in (100..40_000).step_by(100) {
        tick_with(&mut m, t, Idle);
    }
    // t=0, then 10000, 20000, 30000.
    assert_eq!(m.radio().begins.len(), 4);
}

#[test]
fn empty_credentials_still_pace_attempts() {
    let mut m = maintainer(&[]);
    tick_with(&mut m, 0, Disconnected);
    tick_with(&mut m, 10_000, Disconnected);
    tick_with(&mut m, 15_000, Disconnected);
    tick_with(&mut m, 20_000, Disconnected);

    assert!(m.radio().begins.is_empty());
    assert_eq!(m.state().last_attempted(), None);
    assert_eq!(m.state().last_attempt_ms(), Some(20_000));
    assert_eq!(m.state().failure_count(), 2);
}

// ── Configuration ────────────────────────────────────────────

#[test]
fn shorter_interval_from_config() {
    let creds = CredentialSet::from_pairs(&[("A", ""), ("B", "")]).unwrap();
    let mut m = ConnectionMaintainer::with_config(
        creds,
        MaintainerConfig { retry_interval_ms: 1_000 },
        MockRadio::new(Disconnected),
        RecordingReporter::default(),
    );
    m.tick(0);
    m.tick(1_000);
    m.tick(2_000);
    assert_eq!(m.radio().attempted_ssids(), vec!["B", "A"]);
}

#[test]
fn into_parts_returns_collaborators() {
    let mut m = maintainer(&[("A", "")]);
    tick_with(&mut m, 0, Idle);
    let (radio, reporter) = m.into_parts();
    assert_eq!(radio.begins.len(), 1);
    assert_eq!(reporter.reports, vec![Idle]);
}
