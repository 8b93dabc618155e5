use super::*;
use crate::testing::clean_test_env;

fn env_with(configure: impl FnOnce(&mut EnvironmentConfig)) -> EnvironmentConfig {
    let mut env = EnvironmentConfig::default();
    configure(&mut env);
    env
}

#[test]
fn test_empty_environment_has_no_override() {
    let env = EnvironmentConfig::default();
    assert_eq!(env.color_override(), None);
    assert_eq!(env.resolve_color(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_no_color_disables() {
    let env = env_with(|env| env.no_color = Some("1".to_string()));
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_with(|env| env.no_color = Some(String::new()));
    assert_eq!(env.color_override(), None);
}

#[test]
fn test_force_color_beats_no_color_and_clicolor() {
    let env = env_with(|env| {
        env.clicolor = Some("0".to_string());
        env.no_color = Some("1".to_string());
        env.force_color = Some("1".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Always));
}

#[test]
fn test_force_color_beats_ci() {
    let env = env_with(|env| {
        env.ci = Some("true".to_string());
        env.force_color = Some("true".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Always));
}

#[test]
fn test_force_color_zero_disables() {
    let env = env_with(|env| env.force_color = Some("0".to_string()));
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}

#[test]
fn test_unrecognised_force_color_falls_through() {
    let env = env_with(|env| {
        env.force_color = Some("sometimes".to_string());
        env.clicolor = Some("0".to_string());
    });
    assert_eq!(env.color_override(), Some(ColorIntent::Never));

    let env = env_with(|env| env.force_color = Some("sometimes".to_string()));
    assert_eq!(env.color_override(), None);
}

#[test]
fn test_ci_alone_disables() {
    let env = env_with(|env| env.ci = Some("1".to_string()));
    assert_eq!(env.color_override(), Some(ColorIntent::Never));
}

#[test]
fn test_explicit_intent_ignores_environment() {
    let env = env_with(|env| env.no_color = Some("1".to_string()));
    assert_eq!(env.resolve_color(ColorIntent::Always), ColorIntent::Always);

    let env = env_with(|env| env.force_color = Some("1".to_string()));
    assert_eq!(env.resolve_color(ColorIntent::Never), ColorIntent::Never);
    assert_eq!(env.resolve_color(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
#[serial_test::serial]
fn test_load_reads_standard_variables() {
    let guard = clean_test_env();
    guard.set("NO_COLOR", "1");
    guard.set("CI", "true");

    let env = EnvironmentConfig::load().unwrap();
    assert_eq!(env.no_color.as_deref(), Some("1"));
    assert_eq!(env.ci.as_deref(), Some("true"));
    assert_eq!(env.force_color, None);
}
