//! Standard color variables
//!
//! `NO_COLOR`, `FORCE_COLOR`, `CLICOLOR` and `CI` are conventions shared
//! across terminal tools rather than pipecheck settings, so they are read
//! separately from the `PIPECHECK_*` variables and only ever replace an
//! `auto` color intent.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Color-related variables as found in the process environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub clicolor: Option<String>,
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Self>()?)
    }

    /// Color intent implied by the environment, if any
    ///
    /// Precedence, highest first: a recognised `FORCE_COLOR` value, a
    /// non-empty `NO_COLOR`, `CLICOLOR=0`, then any `CI` value (off).
    pub fn color_override(&self) -> Option<ColorIntent> {
        let forced = non_empty(&self.force_color).and_then(|value| match value {
            "0" | "false" => Some(ColorIntent::Never),
            "1" | "2" | "3" | "true" => Some(ColorIntent::Always),
            _ => None,
        });

        forced
            .or_else(|| non_empty(&self.no_color).map(|_| ColorIntent::Never))
            .or_else(|| (self.clicolor.as_deref() == Some("0")).then_some(ColorIntent::Never))
            .or_else(|| self.ci.as_ref().map(|_| ColorIntent::Never))
    }

    /// Resolve a configured intent; explicit `always`/`never` are kept
    pub fn resolve_color(&self, intent: ColorIntent) -> ColorIntent {
        match intent {
            ColorIntent::Auto => self.color_override().unwrap_or(ColorIntent::Auto),
            explicit => explicit,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
