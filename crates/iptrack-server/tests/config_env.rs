#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::time::Duration;

use iptrack_server::config::Config;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_with_empty_env() {
    let cfg = Config::from_lookup(lookup(&[])).expect("must load");

    assert_eq!(cfg.ingest.port, 5000);
    assert_eq!(cfg.ingest.read_timeout, Duration::from_secs(10));
    assert_eq!(cfg.ingest.write_timeout, Duration::from_secs(10));
    assert_eq!(cfg.ingest.idle_timeout, Duration::from_secs(60));

    assert_eq!(cfg.metrics.port, 9102);
    assert_eq!(cfg.metrics.read_timeout, Duration::from_secs(5));
    assert_eq!(cfg.metrics.write_timeout, Duration::from_secs(5));
    assert_eq!(cfg.metrics.idle_timeout, Duration::from_secs(60));

    assert_eq!(cfg.shutdown_grace, Duration::from_secs(30));
}

#[test]
fn env_overrides_apply() {
    let cfg = Config::from_lookup(lookup(&[
        ("LOG_SERVER_PORT", "8080"),
        ("METRICS_SERVER_WRITE_TIMEOUT", "2"),
        ("SHUTDOWN_GRACE_TIMEOUT", "5"),
    ]))
    .expect("must load");

    assert_eq!(cfg.ingest.port, 8080);
    assert_eq!(cfg.metrics.write_timeout, Duration::from_secs(2));
    assert_eq!(cfg.shutdown_grace, Duration::from_secs(5));
    // untouched knobs keep their defaults
    assert_eq!(cfg.metrics.port, 9102);
}

#[test]
fn unparsable_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[
        ("LOG_SERVER_PORT", "not-a-port"),
        ("METRICS_SERVER_READ_TIMEOUT", "soon"),
        ("LOG_SERVER_IDLE_TIMEOUT", "10ms"),
    ]))
    .expect("must load");

    assert_eq!(cfg.ingest.port, 5000);
    assert_eq!(cfg.metrics.read_timeout, Duration::from_secs(5));
    assert_eq!(cfg.ingest.idle_timeout, Duration::from_secs(60));
}

#[test]
fn seconds_suffix_is_tolerated() {
    let cfg = Config::from_lookup(lookup(&[
        ("LOG_SERVER_READ_TIMEOUT", "10s"),
        ("METRICS_SERVER_WRITE_TIMEOUT", "2"),
    ]))
    .expect("must load");

    assert_eq!(cfg.ingest.read_timeout, Duration::from_secs(10));
    assert_eq!(cfg.metrics.write_timeout, Duration::from_secs(2));
}

#[test]
fn port_zero_is_rejected() {
    let err = Config::from_lookup(lookup(&[("LOG_SERVER_PORT", "0")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn zero_timeout_is_rejected() {
    let err = Config::from_lookup(lookup(&[("METRICS_SERVER_WRITE_TIMEOUT", "0")]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
