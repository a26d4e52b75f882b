//! Translation of registered flags into a `clap` command.
//!
//! Clap does the tokenising: it accepts `--name value`, `--name=value`,
//! `-c value`, bundled shorts, and `--`. Every flag, alias records
//! included, is its own argument collecting raw tokens together with their
//! command-line indices, so the flag set can replay them in the order they
//! were typed and under the name that was typed.

use clap::{Arg, ArgAction, Command, value_parser};

use super::Flag;

/// Argument id collecting positional arguments.
pub(super) const POSITIONAL_ID: &str = "tagflags::positional";

const HELP_ID: &str = "tagflags::help";

pub(super) fn build(name: &str, flags: &[Flag<'_>]) -> Command {
    let mut command = Command::new(name.to_owned())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(POSITIONAL_ID)
                .value_name("ARGS")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(String)),
        );

    for flag in flags {
        command = command.arg(flag_arg(flag));
    }

    if let Some(help) = help_arg(flags) {
        command = command.arg(help);
    }
    command
}

fn flag_arg(flag: &Flag<'_>) -> Arg {
    let mut arg = Arg::new(flag.name().to_owned())
        .long(flag.name().to_owned())
        .help(flag.usage().to_owned())
        .value_name(flag.type_name())
        .value_parser(value_parser!(String))
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .hide(flag.is_hidden() || flag.deprecated().is_some());
    if let Some(short) = flag.shorthand() {
        arg = arg.short(short);
    }
    match flag.no_opt_default() {
        Some(missing) => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value(missing.to_owned()),
        None => arg.num_args(1),
    }
}

/// `--help`/`-h`, unless the flag set already uses those names.
fn help_arg(flags: &[Flag<'_>]) -> Option<Arg> {
    if flags.iter().any(|flag| flag.name() == "help") {
        return None;
    }
    let mut help = Arg::new(HELP_ID)
        .long("help")
        .help("Print help")
        .action(ArgAction::Help);
    if !flags.iter().any(|flag| flag.shorthand() == Some('h')) {
        help = help.short('h');
    }
    Some(help)
}
