//! Cleaning stages
//!
//! One struct per step of the cleaning pipeline, in the order they run:
//!
//! 1. [`Lowercase`]: String → String
//! 2. [`StripPunctuation`]: String → String
//! 3. [`SplitWhitespace`]: String → Vec<String>
//! 4. [`FilterAndLemmatize`]: Vec<String> → Vec<String>
//! 5. [`JoinTokens`]: Vec<String> → String

use crate::lexicon::Lexicon;
use crate::transforms::Runnable;
use std::sync::Arc;

/// Lowercase the entire text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Runnable<String, String> for Lowercase {
    fn run(&self, input: String) -> String {
        input.to_lowercase()
    }
}

/// Delete ASCII punctuation in place.
///
/// Nothing is inserted where a mark was removed, so "don't" becomes "dont"
/// and "state-of-the-art" becomes "stateoftheart".
#[derive(Debug, Clone, Copy, Default)]
pub struct StripPunctuation;

impl Runnable<String, String> for StripPunctuation {
    fn run(&self, mut input: String) -> String {
        input.retain(|c| !c.is_ascii_punctuation());
        input
    }
}

/// Split on runs of whitespace. Empty tokens never appear.
///
/// The information separators U+001C..=U+001F count as whitespace too.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitWhitespace;

impl Runnable<String, Vec<String>> for SplitWhitespace {
    fn run(&self, input: String) -> Vec<String> {
        input
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Drop stopwords and blank tokens, lemmatize everything else.
#[derive(Debug, Clone)]
pub struct FilterAndLemmatize {
    lexicon: Arc<Lexicon>,
}

impl FilterAndLemmatize {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl Runnable<Vec<String>, Vec<String>> for FilterAndLemmatize {
    fn run(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.lexicon.is_stopword(token) && !token.trim().is_empty())
            .map(|token| self.lexicon.lemmatize(token))
            .collect()
    }
}

/// Join tokens with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinTokens;

impl Runnable<Vec<String>, String> for JoinTokens {
    fn run(&self, tokens: Vec<String>) -> String {
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::ENGLISH;
    use rstest::rstest;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn lowercase_handles_unicode() {
        let out = Lowercase.run("The ÉCOLE Was OPEN".to_string());
        assert_eq!(out, "the école was open");
    }

    #[rstest]
    #[case("don't", "dont")]
    #[case("state-of-the-art", "stateoftheart")]
    #[case("end. next", "end next")]
    #[case("a!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~b", "ab")]
    #[case("«quoted» — dash", "«quoted» — dash")]
    fn strip_punctuation_removes_ascii_marks_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(StripPunctuation.run(input.to_string()), expected);
    }

    #[test]
    fn split_drops_empty_tokens() {
        let out = SplitWhitespace.run("  alpha\t\tbeta\n\n gamma  ".to_string());
        assert_eq!(out, tokens(&["alpha", "beta", "gamma"]));
    }

    #[rstest]
    #[case("cats\u{1c}dogs", &["cats", "dogs"])]
    #[case("a\u{1d}b\u{1e}c\u{1f}d", &["a", "b", "c", "d"])]
    #[case("left\u{a0}right\u{2003}end", &["left", "right", "end"])]
    #[case("\u{1f}\u{1c} \u{85}", &[])]
    fn split_on_unicode_separators(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(SplitWhitespace.run(input.to_string()), tokens(expected));
    }

    #[test]
    fn split_empty_input() {
        assert!(SplitWhitespace.run(String::new()).is_empty());
        assert!(SplitWhitespace.run(" \n\t ".to_string()).is_empty());
    }

    #[test]
    fn filter_and_lemmatize_drops_stopwords() {
        let stage = FilterAndLemmatize::new(Arc::clone(&ENGLISH));
        let out = stage.run(tokens(&["the", "cats", "are", "running", "quickly"]));
        assert_eq!(out, tokens(&["cat", "running", "quickly"]));
    }

    #[test]
    fn filter_keeps_order() {
        let stage = FilterAndLemmatize::new(Arc::clone(&ENGLISH));
        let out = stage.run(tokens(&["zebras", "of", "apples"]));
        assert_eq!(out, tokens(&["zebra", "apple"]));
    }

    #[test]
    fn join_uses_single_spaces() {
        assert_eq!(JoinTokens.run(tokens(&["a", "b", "c"])), "a b c");
        assert_eq!(JoinTokens.run(Vec::new()), "");
    }
}
