//! English lemmatizer modelled on WordNet's morphological processor.
//!
//! Lookups go through two layers:
//!
//! 1. an exception table per part of speech (`inflected base` pairs, in the
//!    WordNet `*.exc` layout) for irregular forms and for words that look
//!    inflected but are not ("news", "always");
//! 2. detachment rules for regular inflection.
//!
//! Noun rules only produce a lemma that is listed in the bundled noun index
//! (`data/lemmas/noun.idx`); a token no rule maps onto a known noun comes
//! back unchanged, so "texas" stays "texas" and "zombies" becomes "zombie".
//! Verbs and adjectives have no index and use guarded rules instead: short
//! words, words ending in `ss`/`us`/`is`, and stems without a vowel are left
//! alone. The default part of speech is [`PartOfSpeech::Noun`], which leaves
//! "-ing" and "-ly" forms alone.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NOUN_EXCEPTIONS: &str = include_str!("../../data/lemmas/noun.exc");
const VERB_EXCEPTIONS: &str = include_str!("../../data/lemmas/verb.exc");
const ADJECTIVE_EXCEPTIONS: &str = include_str!("../../data/lemmas/adj.exc");
const NOUN_INDEX: &str = include_str!("../../data/lemmas/noun.idx");

/// Words shorter than this are never rewritten by the rules.
const MIN_INFLECTED_LEN: usize = 4;

/// Endings that mark a base form even though the word ends in "s".
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Sibilant plurals that take "-es".
const ES_PLURAL_ENDINGS: &[&str] = &["sses", "shes", "ches", "xes", "zzes"];

/// Noun detachment rules, tried in order. Plain "-s" comes first so that
/// "-ies" plurals reach an "-ie" base ("zombies") before a "-y" base.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Part of speech assumed when lemmatizing a bare token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    #[default]
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part of speech '{0}' (expected noun, verb, adjective or adverb)")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPartOfSpeech(s.to_string()))
    }
}

/// `inflected -> base` pairs for one part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExceptionTable(HashMap<String, String>);

impl ExceptionTable {
    /// Parse `inflected base` lines; blank lines and `#` comments are skipped,
    /// as are lines with fewer than two fields.
    fn parse(source: &str) -> Self {
        let entries = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                Some((fields.next()?.to_string(), fields.next()?.to_string()))
            })
            .collect();
        Self(entries)
    }

    fn get(&self, word: &str) -> Option<&str> {
        self.0.get(word).map(String::as_str)
    }
}

/// Known lemmas, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LemmaIndex(HashSet<String>);

impl LemmaIndex {
    fn parse(source: &str) -> Self {
        let words = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self(words)
    }

    fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

/// Maps a token to its dictionary base form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lemmatizer {
    pos: PartOfSpeech,
    nouns: ExceptionTable,
    verbs: ExceptionTable,
    adjectives: ExceptionTable,
    noun_index: LemmaIndex,
}

impl Lemmatizer {
    /// English exception tables, noun mode.
    pub fn english() -> Self {
        Self {
            pos: PartOfSpeech::default(),
            nouns: ExceptionTable::parse(NOUN_EXCEPTIONS),
            verbs: ExceptionTable::parse(VERB_EXCEPTIONS),
            adjectives: ExceptionTable::parse(ADJECTIVE_EXCEPTIONS),
            noun_index: LemmaIndex::parse(NOUN_INDEX),
        }
    }

    /// Change the part of speech used by [`Lemmatizer::lemmatize`].
    #[must_use]
    pub fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = pos;
        self
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Lemmatize under the configured part of speech.
    pub fn lemmatize(&self, token: &str) -> String {
        self.lemmatize_as(token, self.pos)
    }

    /// Lemmatize under an explicit part of speech. Tokens no rule applies to
    /// come back unchanged.
    pub fn lemmatize_as(&self, token: &str, pos: PartOfSpeech) -> String {
        let exceptions = match pos {
            PartOfSpeech::Noun => Some(&self.nouns),
            PartOfSpeech::Verb => Some(&self.verbs),
            PartOfSpeech::Adjective => Some(&self.adjectives),
            PartOfSpeech::Adverb => None,
        };
        if let Some(base) = exceptions.and_then(|table| table.get(token)) {
            return base.to_string();
        }

        let base = match pos {
            PartOfSpeech::Noun => self.noun_base(token),
            PartOfSpeech::Verb => verb_base(token),
            PartOfSpeech::Adjective => adjective_base(token),
            PartOfSpeech::Adverb => None,
        };
        match base {
            // "childrens" -> "children" -> "child"
            Some(base) => match exceptions.and_then(|table| table.get(&base)) {
                Some(irregular) => irregular.to_string(),
                None => base,
            },
            None => token.to_string(),
        }
    }

    /// First rule output that is a known noun, or an irregular form whose
    /// base is known ("childrens" -> "children").
    fn noun_base(&self, word: &str) -> Option<String> {
        NOUN_RULES.iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix).filter(|stem| !stem.is_empty())?;
            let candidate = format!("{stem}{replacement}");
            let known = self.nouns.get(&candidate).is_some() || self.noun_index.contains(&candidate);
            known.then_some(candidate)
        })
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

fn verb_base(word: &str) -> Option<String> {
    if word.chars().count() < MIN_INFLECTED_LEN {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return regular_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ied") {
        if stem.len() > 1 {
            return Some(format!("{stem}y"));
        }
    }
    // need, proceed, indeed
    if word.ends_with("eed") {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return regular_stem(stem);
    }
    if has_protected_ending(word) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = strip_es_plural(word) {
        return Some(stem.to_string());
    }
    word.strip_suffix('s').map(str::to_string)
}

fn adjective_base(word: &str) -> Option<String> {
    if word.chars().count() <= MIN_INFLECTED_LEN {
        return None;
    }
    let stem = word
        .strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))?;
    if let Some(stem) = stem.strip_suffix('i') {
        return Some(format!("{stem}y"));
    }
    regular_stem(stem)
}

/// Repair a stem left behind by "-ing", "-ed", "-er" or "-est":
/// undo consonant doubling (running → run) or restore a silent "e"
/// (making → make).
fn regular_stem(stem: &str) -> Option<String> {
    if !stem.chars().any(is_vowel) {
        return None;
    }
    if let Some(undoubled) = undouble(stem) {
        return Some(undoubled.to_string());
    }
    if needs_silent_e(stem) {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

fn undouble(stem: &str) -> Option<&str> {
    if stem.chars().count() < MIN_INFLECTED_LEN {
        return None;
    }
    let mut rev = stem.chars().rev();
    let (last, prev) = (rev.next()?, rev.next()?);
    if last == prev && is_consonant(last) && !matches!(last, 'f' | 'l' | 's' | 'z') {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

fn needs_silent_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    match chars.as_slice() {
        [.., 'c'] | [.., 'u'] | [.., 'v'] => true,
        [v, c] => is_vowel(*v) && is_short_coda(*c),
        [c1, v, c2] => is_consonant(*c1) && is_vowel(*v) && is_short_coda(*c2),
        _ => false,
    }
}

fn is_short_coda(c: char) -> bool {
    is_consonant(c) && !matches!(c, 'w' | 'x' | 'y')
}

fn has_protected_ending(word: &str) -> bool {
    PROTECTED_ENDINGS.iter().any(|ending| word.ends_with(ending))
}

fn strip_es_plural(word: &str) -> Option<&str> {
    ES_PLURAL_ENDINGS
        .iter()
        .any(|ending| word.ends_with(ending))
        .then(|| &word[..word.len() - 2])
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
