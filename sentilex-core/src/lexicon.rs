//! Lexicon management for `sentilex-core`.
//!
//! This module owns the two word sets the classifier matches against. The
//! built-in sets are immutable process-wide statics, built once on first use.
//! Custom sets can be loaded from a YAML file, either replacing the built-in
//! words or extending them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::errors::SentiLexError;

/// Built-in positive indicator words.
pub const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "excellent", "amazing", "wonderful", "love", "enjoy", "best",
];

/// Built-in negative indicator words.
pub const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "terrible", "awful", "worst", "hate", "poor", "disappointing", "boring",
];

static BUILTIN_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    debug!("Initializing built-in lexicon.");
    Lexicon {
        positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
    }
});

/// Which side of the lexicon a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// Two disjoint sets of lowercase words.
///
/// A `Lexicon` can only be built through [`Lexicon::new`] (which validates) or
/// [`Lexicon::builtin`], so every instance holds non-empty, whitespace-free,
/// lowercase words and no word appears in both sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Returns the built-in lexicon shared by the whole process.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }

    /// Builds a lexicon from arbitrary word lists.
    ///
    /// Words are lowercased. All problems are collected and reported together
    /// in [`SentiLexError::InvalidLexicon`].
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self, SentiLexError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut problems = Vec::new();
        let positive = normalize_words(positive, Polarity::Positive, &mut problems);
        let negative = normalize_words(negative, Polarity::Negative, &mut problems);

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        overlap.sort();
        for word in overlap {
            problems.push(format!("Word '{}' appears in both positive and negative lists.", word));
        }

        if !problems.is_empty() {
            return Err(SentiLexError::InvalidLexicon(problems));
        }

        if positive.is_empty() && negative.is_empty() {
            warn!("Lexicon is empty; every input will classify as neutral.");
        }

        Ok(Self { positive, negative })
    }

    /// Looks up a token. The token must already be lowercased.
    pub fn polarity_of(&self, token: &str) -> Option<Polarity> {
        if self.positive.contains(token) {
            Some(Polarity::Positive)
        } else if self.negative.contains(token) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Positive words in sorted order.
    pub fn positive_words(&self) -> Vec<&str> {
        sorted(&self.positive)
    }

    /// Negative words in sorted order.
    pub fn negative_words(&self) -> Vec<&str> {
        sorted(&self.negative)
    }

    /// Total number of words across both sets.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut words: Vec<&str> = set.iter().map(String::as_str).collect();
    words.sort_unstable();
    words
}

fn normalize_words<I, S>(words: I, polarity: Polarity, problems: &mut Vec<String>) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = HashSet::new();
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            problems.push(format!("The {} list contains an empty word.", polarity));
            continue;
        }
        if word.chars().any(char::is_whitespace) {
            // Tokens are split on whitespace, so such an entry could never match.
            problems.push(format!("The {} word '{}' contains whitespace.", polarity, word));
            continue;
        }
        let lowered = word.to_lowercase();
        if !set.insert(lowered) {
            debug!("Ignoring duplicate {} word '{}'.", polarity, word);
        }
    }
    set
}

/// On-disk lexicon description.
///
/// ```yaml
/// positive_words: [good, superb]
/// negative_words: [bad, dreadful]
/// extend_builtin: true
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    /// If true, the words are added to the built-in lexicon instead of replacing it.
    pub extend_builtin: bool,
}

impl LexiconConfig {
    /// Parses a lexicon description from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self, SentiLexError> {
        Ok(serde_yml::from_str(text)?)
    }

    /// Loads a lexicon description from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom lexicon from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;
        debug!(
            "Lexicon file {} lists {} positive and {} negative words (extend_builtin: {}).",
            path.display(),
            config.positive_words.len(),
            config.negative_words.len(),
            config.extend_builtin
        );
        Ok(config)
    }

    /// Validates the description and turns it into a usable [`Lexicon`].
    pub fn into_lexicon(self) -> Result<Lexicon, SentiLexError> {
        if self.extend_builtin {
            merge_lexicon(Lexicon::builtin(), self)
        } else {
            Lexicon::new(self.positive_words, self.negative_words)
        }
    }
}

/// Adds the words of `extra` to `base`. The merged sets must still be disjoint.
pub fn merge_lexicon(base: &Lexicon, extra: LexiconConfig) -> Result<Lexicon, SentiLexError> {
    debug!(
        "Merging {} positive and {} negative words into a lexicon of {} words.",
        extra.positive_words.len(),
        extra.negative_words.len(),
        base.len()
    );
    let positive = base
        .positive
        .iter()
        .cloned()
        .chain(extra.positive_words);
    let negative = base
        .negative
        .iter()
        .cloned()
        .chain(extra.negative_words);
    Lexicon::new(positive, negative)
}

/// Resolves the lexicon to classify with: the file at `path` if given,
/// otherwise a copy of the built-in lexicon.
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            let lexicon = LexiconConfig::load_from_file(path)?
                .into_lexicon()
                .with_context(|| format!("Invalid lexicon in {}", path.display()))?;
            info!("Loaded lexicon with {} words from {}.", lexicon.len(), path.display());
            Ok(lexicon)
        }
        None => {
            debug!("No lexicon file given; using built-in lexicon.");
            Ok(Lexicon::builtin().clone())
        }
    }
}
