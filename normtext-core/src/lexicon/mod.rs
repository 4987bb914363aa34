//! Lexical resources: the stopword set and the lemmatizer.
//!
//! Both are loaded from data bundled into the binary, built once, and then
//! only read. [`ENGLISH`] is the process-wide default; callers that need extra
//! stopwords or another part of speech build their own [`Lexicon`] and share
//! it through an `Arc`.

pub mod lemmatizer;
pub mod stopwords;

pub use lemmatizer::{Lemmatizer, PartOfSpeech, UnknownPartOfSpeech};
pub use stopwords::StopwordSet;

use once_cell::sync::Lazy;
use std::sync::Arc;

/// The default English lexicon: bundled stopwords, noun-mode lemmatizer.
pub static ENGLISH: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::english()));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords: StopwordSet,
    lemmatizer: Lemmatizer,
}

impl Lexicon {
    pub fn new(stopwords: StopwordSet, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords,
            lemmatizer,
        }
    }

    pub fn english() -> Self {
        Self::new(StopwordSet::english(), Lemmatizer::english())
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Lemmatize `token`, keeping it as-is when the only candidate base form
    /// is itself a stopword ("thes" stays "thes", not "the").
    pub fn lemmatize(&self, token: &str) -> String {
        let lemma = self.lemmatizer.lemmatize(token);
        if lemma != token && self.stopwords.contains(&lemma) {
            token.to_string()
        } else {
            lemma
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
