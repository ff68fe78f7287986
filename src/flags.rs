//! Per-command flag sets
//!
//! Each dispatch builds one flag set for the matched command. It starts with
//! nothing but a trailing positional list; the command's customizer adds its
//! own flags before parsing.

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Id of the positional arguments left over after flag parsing
pub const LEFTOVERS: &str = "args";

/// Create the base flag set for `verb`
pub fn flag_set(verb: &'static str) -> Command {
    Command::new(verb)
        .bin_name(format!("gb vendor {verb}"))
        .no_binary_name(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(LEFTOVERS)
                .value_name("ARGS")
                .value_parser(value_parser!(String))
                .action(ArgAction::Append)
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

/// The result of parsing a command's flags
#[derive(Debug, Clone)]
pub struct ParsedFlags {
    matches: ArgMatches,
}

impl ParsedFlags {
    /// Parse `args` (without the verb) against `flags`
    pub fn parse<I, T>(flags: Command, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        flags.try_get_matches_from(args).map(|matches| Self { matches })
    }

    /// Parse `args` (without the verb), also accepting single-dash long
    /// flags such as `-all` or `-branch=v2`
    ///
    /// A single-dash token is read as a long flag only when its name, longer
    /// than one character, is a long flag registered on `flags`. Rewriting
    /// stops at `--` and at the first positional argument.
    pub fn parse_single_dash(flags: Command, args: &[String]) -> Result<Self, clap::Error> {
        let args = expand_single_dash(&flags, args);
        Self::parse(flags, args)
    }

    /// Positional arguments left after the flags
    pub fn remaining(&self) -> Vec<String> {
        self.matches
            .get_many::<String>(LEFTOVERS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Value of a boolean flag; false when the flag is not registered
    pub fn flag(&self, id: &str) -> bool {
        matches!(self.matches.try_get_one::<bool>(id), Ok(Some(true)))
    }

    /// Value of a string flag, if registered and given or defaulted
    pub fn value(&self, id: &str) -> Option<&str> {
        self.matches
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .map(String::as_str)
    }
}

/// Rewrite `-name` to `--name` for the long flags registered on `flags`
fn expand_single_dash(flags: &Command, args: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--" || !arg.starts_with('-') || arg == "-" {
            expanded.push(arg.clone());
            break;
        }

        let (token, name, inline_value) = match arg.strip_prefix("--") {
            Some(rest) => {
                let (name, value) = split_value(rest);
                (arg.clone(), name, value)
            }
            None => {
                let rest = &arg[1..];
                let (name, value) = split_value(rest);
                if name.chars().count() > 1 && find_long(flags, name).is_some() {
                    (format!("-{arg}"), name, value)
                } else {
                    (arg.clone(), name, value)
                }
            }
        };
        expanded.push(token);

        // A separate value belongs to the flag, not to the positionals
        let takes_value = find_long(flags, name)
            .or_else(|| single_short(flags, arg))
            .is_some_and(|flag| flag.get_action().takes_values());
        if takes_value && !inline_value {
            if let Some(value) = iter.next() {
                expanded.push(value.clone());
            }
        }
    }
    expanded.extend(iter.cloned());
    expanded
}

fn split_value(flag: &str) -> (&str, bool) {
    match flag.split_once('=') {
        Some((name, _)) => (name, true),
        None => (flag, false),
    }
}

fn find_long<'c>(flags: &'c Command, name: &str) -> Option<&'c Arg> {
    flags.get_arguments().find(|flag| flag.get_long() == Some(name))
}

/// The flag for a lone short option such as `-f`
fn single_short<'c>(flags: &'c Command, arg: &str) -> Option<&'c Arg> {
    let mut chars = arg.strip_prefix('-')?.chars();
    let short = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    flags.get_arguments().find(|flag| flag.get_short() == Some(short))
}
