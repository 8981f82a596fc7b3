use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn parses_explicit_port_and_host() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_vars(Some("70000"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "70000"));
    assert!(err.to_string().starts_with("invalid PORT \"70000\""));
}

#[test]
fn rejects_hostname_in_bind_host() {
    let err = ServerConfig::from_vars(None, Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}

#[test]
fn from_env_reads_port() {
    // Unique value; no other test touches PORT.
    unsafe { std::env::set_var("PORT", "4123") };
    let cfg = ServerConfig::from_env().unwrap();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(cfg.port, 4123);
}
