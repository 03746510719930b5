use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid boolean {value:?} for --{flag}")]
    InvalidBool { flag: &'static str, value: String },
    #[error("invalid duration {value:?} for --{flag}")]
    InvalidDuration {
        flag: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("invalid integer {value:?} for --{flag}")]
    InvalidInteger {
        flag: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid value {value:?} for --{flag}, expected one of: {expected}")]
    UnknownVariant {
        flag: &'static str,
        value: String,
        expected: String,
    },
    #[error("failed to read in-cluster namespace")]
    NamespaceLookup(#[source] std::io::Error),
    #[error("no namespace could be resolved, required by the {platform} platform")]
    NamespaceUnresolved { platform: String },
}
