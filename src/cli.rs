// SPDX-FileCopyrightText: 2026 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, sync::LazyLock};

use clap::{command, crate_name, value_parser, Arg, ArgAction, Command, ValueHint};
use cli_utils::logging;
use const_format::formatcp;
use pyoutfmt::options::FormatOptions;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_CHECK: &str = "check";
pub const A_S_CHECK: char = 'c';
pub const A_L_INDENTATION: &str = "indentation";
pub const A_S_INDENTATION: char = 'i';
pub const A_L_TABS: &str = "tabs";
pub const A_S_TABS: char = 't';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

pub const DEFAULT_INDENTATION: u8 = 4;
static DEFAULT_INDENTATION_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_INDENTATION.to_string());

fn arg_check() -> Arg {
    Arg::new(A_L_CHECK)
        .help(
            "Do not edit the file but only check \
if it already applies this tools format",
        )
        .action(ArgAction::SetTrue)
        .short(A_S_CHECK)
        .long(A_L_CHECK)
}

fn arg_indentation() -> Arg {
    Arg::new(A_L_INDENTATION)
        .help("Number of spaces per level of indentation")
        .num_args(1)
        .short(A_S_INDENTATION)
        .long(A_L_INDENTATION)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8).range(1..))
        .default_value(DEFAULT_INDENTATION_STR.as_str())
        .conflicts_with(A_L_TABS)
}

fn arg_tabs() -> Arg {
    Arg::new(A_L_TABS)
        .help("Use one tab character per level of indentation")
        .action(ArgAction::SetTrue)
        .short(A_S_TABS)
        .long(A_L_TABS)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help("Source file(s) or director(y|ies) containing text files to format")
        .num_args(1..)
        .value_name("FILE_OR_DIR")
        .value_hint(ValueHint::Other)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn args_matcher() -> Command {
    command!()
        .about("Pretty prints bracketed Python program output")
        .long_about(
            "Takes the compact, single-line or inconsistently formatted \
bracketed data that Python programs tend to print \
(dict and list literals, repr output, and the like), \
and reformats it into a readable, consistently indented, \
multi-line layout: \
every opening '{' or '[' starts a new, further indented block, \
every comma ends its line, \
and every colon is followed by a single space. \
String contents are never altered.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_check())
        .arg(arg_indentation())
        .arg(arg_tabs())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", pyoutfmt::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

pub fn init() -> Result<(FormatOptions, Vec<PathBuf>), InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let check = args.get_flag(A_L_CHECK);
    let indentation = if args.get_flag(A_L_TABS) {
        "\t".to_string()
    } else {
        let indentation_spaces = args
            .get_one::<u8>(A_L_INDENTATION)
            .copied()
            .unwrap_or(DEFAULT_INDENTATION)
            .into();
        " ".repeat(indentation_spaces)
    };
    let src: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    Ok((FormatOptions { check, indentation }, src))
}
