use pipecheck_lib::application::config::AppConfig;
use pipecheck_lib::primitives::{ColorIntent, DanglingEdgePolicy};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.max_body_bytes > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Permissive);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        dangling_edges: DanglingEdgePolicy::Reject,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.dangling_edges, DanglingEdgePolicy::Reject);
    assert_eq!(merged.color, ColorIntent::Never);

    // Untouched fields keep their defaults
    assert_eq!(merged.port, 8000);
    assert_eq!(merged.allowed_origins, vec!["http://localhost:3000"]);
}

#[test]
fn test_default_config_builds_router() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(pipecheck_lib::server::router(&config).is_ok());
}
