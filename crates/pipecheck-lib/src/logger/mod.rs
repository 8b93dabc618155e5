use crate::primitives::*;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose chatter is capped at warn unless RUST_LOG says otherwise
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "h2", "tower", "tokio", "mio"];

/// Installs the process-wide tracing subscriber
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the global subscriber; a second call fails
    pub fn init(config: &LoggerConfig) -> Result<(), LoggerError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::filter_directives(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        tracing::info!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi = config.ansi,
            "Logger initialized"
        );
        Ok(())
    }

    /// Build the default filter: our crates at the configured level,
    /// noisy transport crates at warn
    pub fn filter_directives(level: LogLevel) -> String {
        let level_str = level.as_filter_directive();
        let mut directives = vec![level_str.to_string()];
        directives.push(format!("pipecheck={}", level_str));
        directives.push(format!("pipecheck_lib={}", level_str));
        directives.push(format!("tower_http={}", level_str));
        directives.extend(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)));
        directives.join(",")
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
