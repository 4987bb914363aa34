//! Standard transform definitions
//!
//! The cleaning pipeline is fixed; only the lexicon behind it varies.
//! [`ENGLISH_CLEANING`] is prebuilt over the shared default lexicon with
//! `once_cell::sync::Lazy`; [`cleaning`] builds the same chain over any other.

use crate::lexicon::{Lexicon, ENGLISH};
use crate::transforms::stages::{
    FilterAndLemmatize, JoinTokens, Lowercase, SplitWhitespace, StripPunctuation,
};
use crate::transforms::Transform;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Type alias for the text-to-text cleaning transform
pub type CleaningTransform = Transform<String, String>;

/// Cleaning transform: String → String
///
/// 1. Lowercase
/// 2. Strip ASCII punctuation
/// 3. Split on whitespace
/// 4. Drop stopwords, lemmatize the rest
/// 5. Join with single spaces
pub fn cleaning(lexicon: Arc<Lexicon>) -> CleaningTransform {
    Transform::identity()
        .then(Lowercase)
        .then(StripPunctuation)
        .then(SplitWhitespace)
        .then(FilterAndLemmatize::new(lexicon))
        .then(JoinTokens)
}

/// Cleaning over the default English lexicon.
pub static ENGLISH_CLEANING: Lazy<CleaningTransform> =
    Lazy::new(|| cleaning(Arc::clone(&ENGLISH)));
