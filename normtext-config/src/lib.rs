//! Shared configuration loader for normtext.
//!
//! `defaults/normtext.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. Callers layer user
//! files and command-line overrides on top via [`Loader`] before
//! deserializing into [`NormtextConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use normtext_core::lexicon::{Lemmatizer, Lexicon, PartOfSpeech, StopwordSet};
use normtext_core::walker::WalkOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/normtext.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NormtextConfig {
    pub batch: BatchConfig,
    pub lexicon: LexiconConfig,
    pub logging: LoggingConfig,
}

/// Directory-mode knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchConfig {
    pub pattern: String,
    pub progress: bool,
}

/// Lexical resource knobs. The pipeline itself is not configurable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexiconConfig {
    pub part_of_speech: PartOfSpeech,
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl NormtextConfig {
    /// Build the lexicon described by the `[lexicon]` table.
    pub fn build_lexicon(&self) -> Lexicon {
        Lexicon::new(
            StopwordSet::english().with_extra(&self.lexicon.extra_stopwords),
            Lemmatizer::english().with_pos(self.lexicon.part_of_speech),
        )
    }

    /// Whether `[lexicon]` still matches the bundled defaults.
    pub fn uses_default_lexicon(&self) -> bool {
        self.lexicon.part_of_speech == PartOfSpeech::default()
            && self.lexicon.extra_stopwords.is_empty()
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            pattern: self.batch.pattern.clone(),
            show_progress: self.batch.progress,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NormtextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NormtextConfig, ConfigError> {
    Loader::new().build()
}
