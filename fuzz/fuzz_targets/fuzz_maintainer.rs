//! Fuzz target: `ConnectionMaintainer::tick`
//!
//! Each input byte pair is one tick: the first byte picks the raw link
//! status, the second the time step.  Asserts that ticks never panic, that
//! attempts only ever name configured networks, and that attempts are
//! never closer together than the retry interval.
//!
//! cargo fuzz run fuzz_maintainer

#![no_main]

use libfuzzer_sys::fuzz_target;
use wifikeeper::app::ports::RadioPort;
use wifikeeper::app::status::LinkStatus;
use wifikeeper::config::CredentialSet;
use wifikeeper::ConnectionMaintainer;

const NETWORKS: [&str; 3] = ["alpha", "bravo", "charlie"];

struct Radio {
    status: LinkStatus,
    attempted: bool,
}

impl RadioPort for Radio {
    fn status(&mut self) -> LinkStatus {
        self.status
    }

    fn begin(&mut self, ssid: &str, _password: &str) {
        assert!(NETWORKS.contains(&ssid), "begin with unknown SSID {ssid}");
        self.attempted = true;
    }

    fn current_ssid(&self) -> heapless::String<32> {
        heapless::String::new()
    }
}

fuzz_target!(|data: &[u8]| {
    let count = data.first().map_or(0, |b| usize::from(*b) % (NETWORKS.len() + 1));
    let pairs: Vec<(&str, &str)> = NETWORKS[..count].iter().map(|s| (*s, "")).collect();
    let creds = CredentialSet::from_pairs(&pairs).unwrap();

    let radio = Radio {
        status: LinkStatus::Disconnected,
        attempted: false,
    };
    let mut m = ConnectionMaintainer::new(creds, radio, |_s: LinkStatus| {});

    let mut t: i64 = 0;
    let mut last_attempt: Option<i64> = None;
    for step in data.get(1..).unwrap_or_default().chunks_exact(2) {
        m.radio_mut().status = LinkStatus::from_raw(step[0]);
        m.radio_mut().attempted = false;
        t += i64::from(step[1]) * 100;
        m.tick(t);

        if m.radio().attempted {
            if let Some(prev) = last_attempt {
                assert!(t - prev >= 10_000, "attempts {prev} and {t} too close");
            }
            last_attempt = Some(t);
        }
        if let Some(i) = m.state().last_attempted() {
            assert!(i < count);
        }
    }
});
