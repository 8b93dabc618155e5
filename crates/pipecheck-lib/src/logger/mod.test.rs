use super::*;

#[test]
fn test_filter_directives_scope_levels() {
    let filter = Logger::filter_directives(LogLevel::Debug);
    assert!(filter.starts_with("debug,"));
    assert!(filter.contains("pipecheck_lib=debug"));
    assert!(filter.contains("tower_http=debug"));
    assert!(filter.contains("hyper=warn"));
    assert!(filter.contains("tokio=warn"));
}

#[test]
fn test_filter_directives_parse() {
    for verbosity in 0..=4 {
        let directives = Logger::filter_directives(LogLevel::from_verbosity(verbosity));
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "directives should parse: {}",
            directives
        );
    }
}
