//! The cleaning pipeline bound to a lexicon.

use crate::lexicon::{Lexicon, ENGLISH};
use crate::transforms::standard::{cleaning, CleaningTransform, ENGLISH_CLEANING};
use std::sync::Arc;

/// Turns raw document text into a space-joined stream of lemmas.
///
/// Holds the lexicon by `Arc`, so one `Cleaner` (or several sharing a
/// lexicon) can serve every file of a batch without reloading anything.
pub struct Cleaner {
    lexicon: Arc<Lexicon>,
    transform: CleaningTransform,
}

impl Cleaner {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let transform = cleaning(Arc::clone(&lexicon));
        Self { lexicon, transform }
    }

    /// Cleaner over the shared default English lexicon.
    pub fn english() -> Self {
        Self::new(Arc::clone(&ENGLISH))
    }

    /// Clean one document.
    pub fn clean(&self, text: &str) -> String {
        self.transform.run(text.to_string())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::english()
    }
}

/// Clean `text` with the default English lexicon.
pub fn clean(text: &str) -> String {
    ENGLISH_CLEANING.run(text.to_string())
}
