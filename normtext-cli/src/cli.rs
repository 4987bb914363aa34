//! Argument definitions, shared with `build.rs` for shell completions.

use clap::{value_parser, Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_command() -> Command {
    Command::new("normtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean text files into lowercase, stopword-free, lemmatized token streams")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file or directory path")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("output")
                .help("Output file or directory path")
                .required(true)
                .index(2)
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .help("Glob for file names picked up in directory mode (default: *.txt)"),
        )
        .arg(
            Arg::new("pos")
                .long("pos")
                .help("Part of speech assumed by the lemmatizer (default: noun)")
                .value_parser(["noun", "verb", "adjective", "adverb"]),
        )
        .arg(
            Arg::new("extra-stopword")
                .long("extra-stopword")
                .help("Drop this word as well as the bundled stopwords (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar in directory mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Most verbose log level on stderr (default: info)")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
}
