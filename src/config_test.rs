use super::*;
use std::collections::HashMap;

fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.capacity, CapacityPolicy::Unenforced);
    assert!(cfg.static_dir.ends_with("static"));
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8000");
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 9001 "),
        ("STATIC_DIR", "/srv/www"),
        ("ENFORCE_CAPACITY", "yes"),
    ])
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:9001");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    assert_eq!(cfg.capacity, CapacityPolicy::Enforced);
}

#[test]
fn invalid_port_is_an_error() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn invalid_host_is_an_error() {
    assert!(matches!(config_from(&[("HOST", "not-an-ip")]), Err(ConfigError::InvalidHost(_))));
}

#[test]
fn unrecognised_capacity_flag_stays_off() {
    let cfg = config_from(&[("ENFORCE_CAPACITY", "maybe")]).unwrap();
    assert_eq!(cfg.capacity, CapacityPolicy::Unenforced);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
