//! Text processing utilities for tokenization and n-gram extraction

mod stop_words;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Tokens are runs of at least two word characters
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"))
}

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| stop_words::ENGLISH.iter().copied().collect())
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Whether a lowercase token is an English stop word
pub fn is_stop_word(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// Lowercase, split into word tokens of two or more characters, drop stop words
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    get_token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|s| !is_stop_word(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming
pub fn tokenize_with_stemming(text: &str, stem: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if !stem {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// All n-grams of length `min_n..=max_n` over the token sequence.
///
/// Unigrams come first, then bigrams, and so on. N-gram parts are joined
/// with a single space.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let min_n = min_n.max(1);
    let mut grams = Vec::new();

    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        if n == 1 {
            grams.extend(tokens.iter().cloned());
        } else {
            grams.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
    }

    grams
}
