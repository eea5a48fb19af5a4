//! Candidate rotation across failure streaks.

use crate::mock_radio::{maintainer, tick_with};

use wifikeeper::app::status::LinkStatus::{ConnectionLost, Connected, Disconnected, WrongPassword};

#[test]
fn first_streak_walks_forward_from_zero() {
    let mut m = maintainer(&[("A", ""), ("B", ""), ("C", ""), ("D", "")]);
    tick_with(&mut m, 0, Disconnected);
    for k in 1..=6i64 {
        tick_with(&mut m, k * 10_000, Disconnected);
    }
    assert_eq!(m.radio().attempted_ssids(), vec!["B", "C", "D", "A", "B", "C"]);
}

#[test]
fn success_moves_the_base() {
    let mut m = maintainer(&[("A", ""), ("B", ""), ("C", "")]);
    tick_with(&mut m, 0, Disconnected);
    tick_with(&mut m, 10_000, WrongPassword); // tries B
    tick_with(&mut m, 20_000, WrongPassword); // tries C
    tick_with(&mut m, 20_500, Connected);
    assert_eq!(m.state().last_successful(), Some(2));

    // Link drops; the new streak starts one past C.
    tick_with(&mut m, 90_000, ConnectionLost);
    tick_with(&mut m, 100_000, ConnectionLost);
    assert_eq!(m.radio().attempted_ssids(), vec!["B", "C", "A", "B"]);
}

#[test]
fn success_credit_follows_latest_attempt() {
    let mut m = maintainer(&[("A", ""), ("B", "")]);
    tick_with(&mut m, 0, Disconnected);
    tick_with(&mut m, 10_000, Disconnected); // B
    tick_with(&mut m, 10_001, Connected);
    assert_eq!(m.state().last_successful(), Some(1));

    tick_with(&mut m, 20_000, Disconnected); // (1 + 1) % 2 = A
    tick_with(&mut m, 20_001, Connected);
    assert_eq!(m.state().last_successful(), Some(0));
    assert_eq!(m.state().failure_count(), 0);
}

#[test]
fn staying_connected_does_not_recredit() {
    let mut m = maintainer(&[("A", ""), ("B", "")]);
    tick_with(&mut m, 0, Disconnected);
    tick_with(&mut m, 10_000, Disconnected); // B
    tick_with(&mut m, 10_001, Connected);
    for t in 10_002..10_050 {
        tick_with(&mut m, t, Connected);
    }
    assert_eq!(m.state().last_successful(), Some(1));
    assert_eq!(m.radio().begins.len(), 1);
    assert_eq!(m.reporter().reports, vec![Disconnected, Connected]);
}

#[test]
fn single_network_is_retried_every_cycle() {
    let mut m = maintainer(&[("Only", "password1")]);
    tick_with(&mut m, 0, Disconnected);
    for k in 1..=3i64 {
        tick_with(&mut m, k * 10_000, Disconnected);
    }
    assert_eq!(m.radio().attempted_ssids(), vec!["Only", "Only", "Only"]);
}
