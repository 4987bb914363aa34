//! Command-line interface for normtext
//!
//! Cleans a single text file, or every matching file of a directory, into a
//! lowercase, stopword-free, lemmatized token stream.
//!
//! Usage:
//!   normtext `<input-file>` `<output-file>`    - Clean one file
//!   normtext `<input-dir>` `<output-dir>`      - Clean every *.txt file of a directory
//!
//! Exit status is 1 when the input does not exist, when a single file fails,
//! or when a directory batch cannot start; per-file failures inside a batch
//! are only reported in the summary. An input that exists but is neither a
//! regular file nor a listable directory (`/dev/null`, a directory without
//! read permission) is treated as a batch that cannot start: the listing
//! error is printed and the exit status is 1, rather than reporting an empty
//! batch.

mod cli;
mod logging;

use clap::ArgMatches;
use normtext_config::{ConfigError, Loader, NormtextConfig};
use normtext_core::lexicon::ENGLISH;
use normtext_core::{BatchOutcome, Cleaner, DirectoryWalker, FileProcessor};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::debug;

fn main() {
    let matches = cli::build_command().get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is required");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output is required");

    let config = load_config(&matches).unwrap_or_else(|e| {
        println!("Error: invalid configuration: {}", e);
        process::exit(1);
    });
    logging::init(&config.logging.level);

    // Loaded once, shared by every file
    let lexicon = if config.uses_default_lexicon() {
        Arc::clone(&ENGLISH)
    } else {
        Arc::new(config.build_lexicon())
    };
    let processor = FileProcessor::new(Cleaner::new(lexicon));

    if !input.exists() {
        println!("Error: Input path '{}' does not exist.", input.display());
        process::exit(1);
    }

    if input.is_file() {
        handle_file(&processor, input, output);
    } else {
        handle_directory(&processor, &config, input, output);
    }
}

/// Defaults, then `--config`, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<NormtextConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(pattern) = matches.get_one::<String>("pattern") {
        loader = loader.set_override("batch.pattern", pattern.as_str())?;
    }
    if let Some(pos) = matches.get_one::<String>("pos") {
        loader = loader.set_override("lexicon.part_of_speech", pos.as_str())?;
    }
    if matches.get_flag("no-progress") {
        loader = loader.set_override("batch.progress", false)?;
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("logging.level", level.as_str())?;
    }

    let mut config = loader.build()?;
    if let Some(words) = matches.get_many::<String>("extra-stopword") {
        config.lexicon.extra_stopwords.extend(words.cloned());
    }
    Ok(config)
}

/// Handle a single input file
fn handle_file(processor: &FileProcessor, input: &Path, output: &Path) {
    debug!("Cleaning {}", input.display());
    if processor.process(input, output) {
        println!("Successfully cleaned text and saved to {}", output.display());
    } else {
        println!("Failed to process file");
        process::exit(1);
    }
}

/// Handle an input directory
fn handle_directory(
    processor: &FileProcessor,
    config: &NormtextConfig,
    input: &Path,
    output: &Path,
) {
    let outcome = DirectoryWalker::new(processor, &config.walk_options())
        .and_then(|walker| walker.process_directory(input, output))
        .unwrap_or_else(|e| {
            println!("Error: {}", e);
            process::exit(1);
        });

    match outcome {
        BatchOutcome::NoFiles => {
            println!("No text files found in the input directory.");
        }
        BatchOutcome::Completed(tally) => {
            println!("\nProcessing complete:");
            println!("Successfully processed: {} files", tally.successful);
            println!("Failed to process: {} files", tally.failed);
        }
    }
}
