use super::ConfigError;
use clap::ValueEnum;

/// Case-insensitive lookup over a value enum's names and aliases
pub(super) fn parse_value_enum<T: ValueEnum>(input: &str, what: &str) -> Result<T, ConfigError> {
    T::from_str(input, true).map_err(|_| ConfigError::ParseError {
        value: input.to_string(),
        reason: format!("invalid {what}"),
    })
}

/// `FromStr` for value enums, reporting failures as [`ConfigError::ParseError`]
macro_rules! value_enum_from_str {
    ($($enum_type:ty => $what:literal),+ $(,)?) => {
        $(
            impl FromStr for $enum_type {
                type Err = ConfigError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    shared::parse_value_enum(s, $what)
                }
            }
        )+
    };
}

pub(super) use value_enum_from_str;
