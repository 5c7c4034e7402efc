use crate::assess::decompose::decompose;
use crate::types::Syllable;

/// True when the text contains CJK Unified Ideographs, i.e. must go through
/// character-to-pinyin conversion rather than the romanized-input path.
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Split already-romanized text into syllable tokens.
///
/// Lowercases, drops punctuation, splits on whitespace. Tone-mark and
/// numeric-tone spellings both survive; validation happens in decomposition.
pub fn split_romanized(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Turn one token into a [`Syllable`], canonicalizing valid pinyin to the
/// numeric-tone spelling and keeping undecomposable tokens as raw text.
pub fn canonicalize(token: &str, hanzi: Option<char>) -> Syllable {
    match decompose(token) {
        Ok(d) => Syllable {
            text: d.recompose(),
            hanzi,
            decomposition: Some(d),
        },
        Err(_) => Syllable {
            text: token.to_lowercase(),
            hanzi,
            decomposition: None,
        },
    }
}
