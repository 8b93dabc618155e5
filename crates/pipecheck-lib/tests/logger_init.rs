//! Global subscriber installation
//!
//! Lives in its own test binary: installing the subscriber is once per process.

use pipecheck_lib::logger::Logger;
use pipecheck_lib::primitives::{LogFormat, LogLevel, LogOutput, LoggerConfig, LoggerError};

#[test]
fn test_logger_installs_once() {
    let config = LoggerConfig {
        level: LogLevel::Debug,
        format: LogFormat::Json,
        output: LogOutput::Stdout,
        ansi: false,
    };

    Logger::init(&config).expect("first initialization succeeds");
    tracing::debug!(target: "pipecheck_lib", "emitted through the installed subscriber");

    let again = LoggerConfig {
        format: LogFormat::Pretty,
        output: LogOutput::Stderr,
        ..config
    };
    assert!(matches!(
        Logger::init(&again),
        Err(LoggerError::AlreadyInitialized { .. })
    ));
}
