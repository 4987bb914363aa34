//! Stopword set backed by the bundled English list.

use std::collections::HashSet;

const ENGLISH_STOPWORDS: &str = include_str!("../../data/stopwords_english.txt");

/// A fixed set of high-frequency function words excluded from cleaned output.
///
/// Words are stored lowercased. Entries carrying an apostrophe ("don't") are
/// kept as shipped even though cleaned tokens never contain punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words (lowercased, blanks ignored).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The bundled English list (179 words).
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.lines())
    }

    /// Extend the set with additional words.
    #[must_use]
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Exact membership test. Callers pass already-lowercased tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
