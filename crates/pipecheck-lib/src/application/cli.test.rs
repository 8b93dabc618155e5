use super::*;

#[test]
#[serial_test::serial]
fn test_no_subcommand_defaults_to_none() {
    let _env = crate::testing::clean_test_env();
    let cli = Cli::try_parse_from(["pipecheck"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.config.port, 8000);
}

#[test]
#[serial_test::serial]
fn test_check_subcommand_with_global_flags() {
    let _env = crate::testing::clean_test_env();
    let cli = Cli::try_parse_from([
        "pipecheck",
        "--dangling-edges",
        "reject",
        "check",
        "pipeline.json",
        "--pretty",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Check {
            file: PathBuf::from("pipeline.json"),
            pretty: true,
        })
    );
    assert_eq!(
        cli.config.dangling_edges,
        crate::primitives::DanglingEdgePolicy::Reject
    );
}

#[test]
#[serial_test::serial]
fn test_check_requires_a_file() {
    assert!(Cli::try_parse_from(["pipecheck", "check"]).is_err());
}

#[test]
fn test_version_skips_logging() {
    assert!(!Commands::Version.wants_logging());
    assert!(Commands::Serve.wants_logging());
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
