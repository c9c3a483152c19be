use std::collections::BTreeMap;

/// A token with its term-frequency weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedToken {
    pub token: String,
    pub weight: f32,
}

impl WeightedToken {
    pub fn new(token: impl Into<String>, weight: f32) -> Self {
        Self {
            token: token.into(),
            weight,
        }
    }
}

/// Whitespace word tokens over cleaned text, weighted by term frequency.
///
/// Single characters are dropped (punctuation stripping leaves stray letters
/// like the "c" of "C++"). A `BTreeMap` keeps the token order deterministic
/// so repeated embeddings of the same text are bit-identical.
pub fn tokenize_text(clean_text: &str) -> Vec<WeightedToken> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for word in clean_text.split_whitespace() {
        if word.len() > 1 {
            *counts.entry(word).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(word, count)| WeightedToken::new(format!("word:{word}"), count as f32))
        .collect()
}
