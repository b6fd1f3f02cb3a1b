//! Text processing utilities for tokenization

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::warn;

/// Tokens are runs of at least two word characters
static TOKEN_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_token_pattern() -> Option<&'static Regex> {
    TOKEN_PATTERN
        .get_or_init(|| match Regex::new(r"(?u)\b\w\w+\b") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile token regex");
                None
            }
        })
        .as_ref()
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Options controlling how titles are split into terms
#[derive(Debug, Clone, Default)]
pub struct TokenizerOptions<'a> {
    /// Lowercase text before matching tokens
    pub lowercase: bool,
    /// Apply Porter stemming to each token
    pub stem: bool,
    /// Tokens dropped after lowercasing
    pub stop_words: Option<&'a HashSet<String>>,
}

/// Split text into word tokens
///
/// Single-character tokens and punctuation are discarded.
pub fn tokenize(text: &str, options: &TokenizerOptions<'_>) -> Vec<String> {
    let text = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    let Some(pattern) = get_token_pattern() else {
        return Vec::new();
    };
    let stemmer = options.stem.then(get_stemmer);

    pattern
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|t| options.stop_words.is_none_or(|stop| !stop.contains(*t)))
        .map(|t| match stemmer {
            Some(stemmer) => stemmer.stem(t).into_owned(),
            None => t.to_string(),
        })
        .collect()
}

/// Build word n-grams in `[min_n, max_n]`, joined by single spaces
///
/// Unigrams come first, then bigrams, and so on, each in text order.
pub fn ngrams(tokens: &[String], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let min_n = min_n.max(1);
    if min_n == 1 && max_n == 1 {
        return tokens.to_vec();
    }

    let mut out = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}
