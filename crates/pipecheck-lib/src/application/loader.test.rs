use super::*;
use crate::application::cli::Commands;
use crate::primitives::{ColorIntent, DanglingEdgePolicy};
use crate::testing::clean_test_env;

#[test]
fn test_config_merging() {
    let base = AppConfig::default();
    let override_config = AppConfig {
        log_level: 4,
        color: ColorIntent::Always,
        port: 9999,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Always);
    assert_eq!(merged.port, 9999);
    assert_eq!(merged.host, "127.0.0.1");
}

#[test]
#[serial_test::serial]
fn test_load_from_cli_applies_environment_color() {
    let env = clean_test_env();
    env.set("NO_COLOR", "1");

    let cli = Cli::try_parse_from(["pipecheck", "serve"]).unwrap();
    let loaded = AppConfig::load_from_cli(cli).unwrap();

    assert_eq!(loaded.app_config.color, ColorIntent::Never);
    assert_eq!(loaded.command, Some(Commands::Serve));
}

#[test]
#[serial_test::serial]
fn test_explicit_color_flag_beats_environment() {
    let env = clean_test_env();
    env.set("NO_COLOR", "1");

    let cli = Cli::try_parse_from(["pipecheck", "--color", "always"]).unwrap();
    let loaded = AppConfig::load_from_cli(cli).unwrap();
    assert_eq!(loaded.app_config.color, ColorIntent::Always);
}

#[test]
#[serial_test::serial]
fn test_prefixed_environment_variables_reach_config() {
    let env = clean_test_env();
    env.set("PIPECHECK_PORT", "8123");
    env.set("PIPECHECK_DANGLING_EDGES", "reject");
    env.set("PIPECHECK_ALLOWED_ORIGINS", "http://one.test,http://two.test");

    let cli = Cli::try_parse_from(["pipecheck"]).unwrap();
    let loaded = AppConfig::load_from_cli(cli).unwrap();

    assert_eq!(loaded.app_config.port, 8123);
    assert_eq!(loaded.app_config.dangling_edges, DanglingEdgePolicy::Reject);
    assert_eq!(
        loaded.app_config.allowed_origins,
        vec!["http://one.test", "http://two.test"]
    );
    assert_eq!(loaded.command, None);
}

#[test]
#[serial_test::serial]
fn test_load_from_cli_validates() {
    let _env = clean_test_env();
    let cli = Cli::try_parse_from(["pipecheck", "--allowed-origins", "*"]).unwrap();
    assert!(matches!(
        AppConfig::load_from_cli(cli),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
#[serial_test::serial]
fn test_force_color_wins_in_ci() {
    let env = clean_test_env();
    env.set("CI", "true");
    env.set("FORCE_COLOR", "1");

    let cli = Cli::try_parse_from(["pipecheck"]).unwrap();
    let loaded = AppConfig::load_from_cli(cli).unwrap();
    assert_eq!(loaded.app_config.color, ColorIntent::Always);
    assert!(loaded.app_config.to_logger_config().ansi);
}
