use super::*;

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();
    assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Permissive);
    assert_eq!(config.log_level, 2);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_deserialize_fills_missing_fields_with_defaults() {
    let config: AppConfig =
        serde_json::from_str(r#"{ "port": 9100, "dangling_edges": "reject" }"#).unwrap();
    assert_eq!(config.port, 9100);
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Reject);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
#[serial_test::serial]
fn test_cli_flags_parse() {
    let _env = crate::testing::clean_test_env();
    let config = AppConfig::try_parse_from([
        "pipecheck",
        "--port",
        "9000",
        "--allowed-origins",
        "http://a.test,http://b.test",
        "--dangling-edges",
        "strict",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Reject);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_validate_rejects_zero_body_limit() {
    let mut config = AppConfig {
        max_body_bytes: 0,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_wildcard_origin() {
    let mut config = AppConfig {
        allowed_origins: vec!["*".to_string()],
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_validate_rejects_unprintable_origin() {
    let mut config = AppConfig {
        allowed_origins: vec!["http://bad\norigin".to_string()],
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidOrigin { .. })
    ));
}

#[test]
fn test_validate_trims_and_drops_blank_origins() {
    let mut config = AppConfig {
        allowed_origins: vec![
            " http://a.test ".to_string(),
            "".to_string(),
            "http://b.test".to_string(),
        ],
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
}

#[test]
fn test_logger_config_respects_color_intent() {
    let config = AppConfig {
        color: ColorIntent::Never,
        log_level: 3,
        ..AppConfig::default()
    };
    let logger_config = config.to_logger_config();
    assert!(!logger_config.ansi);
    assert_eq!(logger_config.level, LogLevel::Debug);

    let config = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    assert!(config.to_logger_config().ansi);
}
