use std::ffi::OsString;

use clap::{Arg, ArgMatches, Command};
use resources::config::{
    options::{OptionKind, OptionSpec, OPTIONS},
    FlagSource,
};

/// Builds the command line from the option table. No defaults are attached
/// here so that only explicitly passed flags show up in the matches.
pub fn command() -> Command<'static> {
    Command::new("dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Nuclio dashboard")
        .args(OPTIONS.iter().map(arg))
}

fn arg(spec: &'static OptionSpec) -> Arg<'static> {
    // repeated flags are allowed, the last one wins
    let arg = Arg::new(spec.flag)
        .long(spec.flag)
        .help(spec.help)
        .takes_value(true)
        .multiple_occurrences(true);
    match spec.kind {
        OptionKind::Text => arg.value_name("VALUE"),
        // `--no-pull` alone means true, `--no-pull=false` is still accepted
        OptionKind::Bool | OptionKind::ExactTrue => arg
            .value_name("BOOL")
            .min_values(0)
            .require_equals(true)
            .default_missing_value("true"),
    }
}

/// Rewrites single dash spellings of known flags (`-platform kube`,
/// `-no-pull=true`) to their double dash form.
pub fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
                let flag = name.split('=').next().unwrap_or(name);
                OPTIONS
                    .iter()
                    .any(|spec| spec.flag == flag)
                    .then(|| OsString::from(format!("-{}", s)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

pub fn flags(matches: &ArgMatches) -> FlagSource {
    OPTIONS
        .iter()
        .filter_map(|spec| {
            matches
                .values_of(spec.flag)
                .and_then(|values| values.last())
                .map(|value| (spec.flag, value))
        })
        .collect()
}
