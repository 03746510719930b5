use std::collections::HashMap;

use strum::Display;

use super::options::{OptionKind, OptionSpec};

/// Where the final value of an option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Origin {
    Flag,
    Environment,
    Default,
    /// The namespace of the service account the dashboard runs as.
    InCluster,
}

/// One layer of option values, consulted in order by the resolver.
pub trait OptionSource {
    fn origin(&self) -> Origin;

    fn lookup(&self, spec: &OptionSpec) -> Option<String>;
}

/// Values explicitly passed on the command line, keyed by flag name.
#[derive(Debug, Default, Clone)]
pub struct FlagSource(HashMap<String, String>);

impl FlagSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.0.insert(flag.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlagSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl OptionSource for FlagSource {
    fn origin(&self) -> Origin {
        Origin::Flag
    }

    fn lookup(&self, spec: &OptionSpec) -> Option<String> {
        self.0.get(spec.flag).cloned()
    }
}

/// A snapshot of environment variables, keyed by variable name.
#[derive(Debug, Default, Clone)]
pub struct EnvSource(HashMap<String, String>);

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl OptionSource for EnvSource {
    fn origin(&self) -> Origin {
        Origin::Environment
    }

    fn lookup(&self, spec: &OptionSpec) -> Option<String> {
        let value = self.get(spec.env?)?;
        if value.is_empty() {
            return None;
        }
        match spec.kind {
            OptionKind::Text => Some(value.to_owned()),
            // unparseable booleans fall back to the next source
            OptionKind::Bool => parse_bool(value).map(|b| b.to_string()),
            OptionKind::ExactTrue => Some((value == "true").to_string()),
        }
    }
}

/// The compiled-in defaults of the option table. Always yields a value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSource;

impl OptionSource for DefaultSource {
    fn origin(&self) -> Origin {
        Origin::Default
    }

    fn lookup(&self, spec: &OptionSpec) -> Option<String> {
        Some(spec.default.to_owned())
    }
}

/// Accepts the same spellings as Go's `strconv.ParseBool`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
