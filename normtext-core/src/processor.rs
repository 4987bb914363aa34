//! Single-file processing
//!
//! [`FileProcessor`] reads one UTF-8 file, cleans it in memory and writes the
//! result. Every failure along the way is a [`ProcessError`]; the boolean
//! [`FileProcessor::process`] entry point logs the error and reports `false`
//! instead of propagating it.

use crate::cleaner::Cleaner;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Error that can occur while processing one file
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input could not be opened or read
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input is not valid UTF-8
    #[error("could not decode {} as UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output could not be written
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// The file the failing step was working on.
    pub fn path(&self) -> &Path {
        match self {
            ProcessError::Read { path, .. }
            | ProcessError::Decode { path, .. }
            | ProcessError::Write { path, .. } => path,
        }
    }
}

/// Cleans one input file into one output file.
pub struct FileProcessor {
    cleaner: Cleaner,
}

impl FileProcessor {
    pub fn new(cleaner: Cleaner) -> Self {
        Self { cleaner }
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    /// Read, clean and write, returning the first failure.
    ///
    /// The output file is overwritten if it exists; its parent directory must
    /// already exist. Nothing is written when reading fails.
    pub fn try_process(&self, input: &Path, output: &Path) -> Result<(), ProcessError> {
        let text = fs::read_to_string(input).map_err(|source| {
            let path = input.to_path_buf();
            if source.kind() == io::ErrorKind::InvalidData {
                ProcessError::Decode { path, source }
            } else {
                ProcessError::Read { path, source }
            }
        })?;

        let cleaned = self.cleaner.clean(&text);

        fs::write(output, cleaned.as_bytes()).map_err(|source| ProcessError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        debug!(
            "Cleaned {} -> {} ({} bytes in, {} bytes out)",
            input.display(),
            output.display(),
            text.len(),
            cleaned.len()
        );
        Ok(())
    }

    /// Process one file, logging any failure. Returns `true` on success.
    pub fn process(&self, input: &Path, output: &Path) -> bool {
        match self.try_process(input, output) {
            Ok(()) => true,
            Err(err) => {
                error!("Error processing file {}: {}", input.display(), err);
                false
            }
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(Cleaner::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_cleaned_text() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "The cats are running quickly!").unwrap();

        assert!(FileProcessor::default().process(&input, &output));
        assert_eq!(fs::read_to_string(&output).unwrap(), "cat running quickly");
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Dogs bark.").unwrap();
        fs::write(&output, "stale content that is much longer than the result").unwrap();

        FileProcessor::default().try_process(&input, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "dog bark");
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("out.txt");

        let err = FileProcessor::default()
            .try_process(&input, &output)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Read { .. }));
        assert_eq!(err.path(), input.as_path());
        assert!(!output.exists());
        assert!(!FileProcessor::default().process(&input, &output));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("latin1.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, [0x63, 0x61, 0x66, 0xe9, 0x20, 0xff, 0xfe]).unwrap();

        let err = FileProcessor::default()
            .try_process(&input, &output)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Decode { .. }), "got {err:?}");
        assert!(err.to_string().contains("latin1.txt"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_output_parent_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("no").join("such").join("dir.txt");
        fs::write(&input, "words").unwrap();

        let err = FileProcessor::default()
            .try_process(&input, &output)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Write { .. }));
        assert_eq!(err.path(), output.as_path());
    }
}
