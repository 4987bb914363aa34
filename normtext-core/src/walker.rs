//! Batch mode: every matching file in one directory.
//!
//! The walk is flat (subdirectories are not descended into) and entry names
//! are matched against a glob pattern, `*.txt` by default. Hidden names match
//! like any other, and a matching entry that cannot be read as a file (a
//! directory named `notes.txt`) is attempted and counted as a failure.
//! Entries are handled in the order the filesystem lists them. A failing
//! entry is counted and the batch carries on.

use crate::processor::FileProcessor;
use glob::{MatchOptions, Pattern, PatternError};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PATTERN: &str = "*.txt";

const PROGRESS_TEMPLATE: &str =
    "{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}<{eta_precise}]";

/// `*` also matches a leading dot, so `*.txt` picks up `.hidden.txt`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Errors that stop a batch before any file is processed
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("could not create output directory {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not list input directory {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Per-batch success and failure counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub successful: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No file in the input directory matched the pattern.
    NoFiles,
    /// Every matching file was attempted.
    Completed(Tally),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Glob matched against file names, not full paths.
    pub pattern: String,
    /// Draw a progress bar on stderr while the batch runs.
    pub show_progress: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            show_progress: true,
        }
    }
}

/// Runs a [`FileProcessor`] over a directory.
pub struct DirectoryWalker<'a> {
    processor: &'a FileProcessor,
    pattern: Pattern,
    show_progress: bool,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(processor: &'a FileProcessor, options: &WalkOptions) -> Result<Self, WalkError> {
        let pattern = Pattern::new(&options.pattern).map_err(|source| WalkError::Pattern {
            pattern: options.pattern.clone(),
            source,
        })?;
        Ok(Self {
            processor,
            pattern,
            show_progress: options.show_progress,
        })
    }

    /// Entries directly inside `input_dir` whose names match the pattern, in
    /// listing order. Names that are not valid UTF-8 never match.
    pub fn matching_files(&self, input_dir: &Path) -> Result<Vec<PathBuf>, WalkError> {
        let read_error = |source| WalkError::ReadInput {
            path: input_dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(input_dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.pattern.matches_with(name, MATCH_OPTIONS));
            if matches {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Clean every matching file of `input_dir` into `output_dir` under the
    /// same file name. `output_dir` is created (with parents) first, even when
    /// nothing matches.
    pub fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchOutcome, WalkError> {
        fs::create_dir_all(output_dir).map_err(|source| WalkError::CreateOutput {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let files = self.matching_files(input_dir)?;
        if files.is_empty() {
            debug!(
                "No files matching '{}' in {}",
                self.pattern.as_str(),
                input_dir.display()
            );
            return Ok(BatchOutcome::NoFiles);
        }

        debug!(
            "Processing {} files from {} into {}",
            files.len(),
            input_dir.display(),
            output_dir.display()
        );

        let progress = self.progress_bar(files.len());
        let mut tally = Tally::default();
        for file in &files {
            let Some(name) = file.file_name() else {
                continue;
            };
            let target = output_dir.join(name);
            debug!("{} -> {}", file.display(), target.display());
            tally.record(self.processor.process(file, &target));
            progress.inc(1);
        }
        progress.finish();

        debug!(
            "Batch finished: {} succeeded, {} failed",
            tally.successful, tally.failed
        );
        Ok(BatchOutcome::Completed(tally))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Processing files");
        bar
    }
}
