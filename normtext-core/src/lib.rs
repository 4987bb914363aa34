//! # normtext-core
//!
//! Batch text normalization for downstream NLP work (search indexing,
//! classification). A document goes through one fixed pipeline:
//!
//! lowercase → strip ASCII punctuation → split on whitespace → drop stopwords
//! → lemmatize → join with single spaces
//!
//! The pieces, bottom-up:
//!
//! - [`lexicon`]: the bundled English stopword list and the lemmatizer, built
//!   once and shared by reference.
//! - [`transforms`]: the composable stage machinery and the cleaning stages.
//! - [`cleaner`]: [`Cleaner`], the pipeline bound to a lexicon.
//! - [`processor`]: [`FileProcessor`], one input file to one output file.
//! - [`walker`]: [`DirectoryWalker`], every matching file in a directory.

pub mod cleaner;
pub mod lexicon;
pub mod processor;
pub mod transforms;
pub mod walker;

pub use cleaner::{clean, Cleaner};
pub use lexicon::{Lemmatizer, Lexicon, PartOfSpeech, StopwordSet};
pub use processor::{FileProcessor, ProcessError};
pub use transforms::{Runnable, Transform};
pub use walker::{BatchOutcome, DirectoryWalker, Tally, WalkError, WalkOptions};
