use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = WebConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        WebConfig {
            port: DEFAULT_PORT,
            api_upstream: DEFAULT_API_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = WebConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("NOTENEST_API_URL", "http://api.internal:9000/api"),
        ("NOTENEST_PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "http://api.internal:9000/api");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn api_url_trailing_slashes_are_trimmed() {
    let cfg = WebConfig::from_lookup(lookup(&[("NOTENEST_API_URL", " http://localhost:8000/api// ")])).unwrap();
    assert_eq!(cfg.api_upstream, "http://localhost:8000/api");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let cfg = WebConfig::from_lookup(lookup(&[("NOTENEST_API_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_upstream, DEFAULT_API_URL);
}

#[test]
fn unparseable_port_is_an_error() {
    let err = WebConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn zero_timeout_is_rejected() {
    let err = WebConfig::from_lookup(lookup(&[("NOTENEST_PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "NOTENEST_PROXY_TIMEOUT_SECS", .. }));
}
