use pinyin::ToPinyin;

use crate::assess::tokenization::{canonicalize, is_han};
use crate::assess::{align, Alignment};
use crate::error::AssessError;
use crate::pipeline::traits::{Romanizer, SyllableAligner};
use crate::types::Syllable;

/// Default romanizer over the `pinyin` crate's character table.
///
/// Han characters map to their default (non-heteronym) numeric-tone reading;
/// punctuation and other non-Han characters are skipped. A Han character
/// without a reading is a decomposition error, never a silent skip.
pub struct HanRomanizer;

impl Romanizer for HanRomanizer {
    fn romanize(&self, text: &str) -> Result<Vec<Syllable>, AssessError> {
        let mut syllables = Vec::new();
        for (ch, reading) in text.chars().zip(text.to_pinyin()) {
            match reading {
                Some(p) => syllables.push(canonicalize(p.with_tone_num_end(), Some(ch))),
                None if is_han(ch) => {
                    return Err(AssessError::decomposition(
                        ch.to_string(),
                        "no pinyin reading for character",
                    ));
                }
                None => {}
            }
        }
        Ok(syllables)
    }
}

/// Default aligner: the minimum-edit-distance dynamic program.
pub struct EditDistanceAligner;

impl SyllableAligner for EditDistanceAligner {
    fn align(&self, expected: &[Syllable], actual: &[Syllable]) -> Alignment {
        align(expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(syllables: &[Syllable]) -> Vec<&str> {
        syllables.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn converts_han_text_to_numeric_tone_pinyin() {
        let syllables = HanRomanizer.romanize("你好").expect("romanize");
        assert_eq!(texts(&syllables), ["ni3", "hao3"]);
        assert_eq!(syllables[0].hanzi, Some('你'));
        assert!(syllables.iter().all(Syllable::is_decomposable));
    }

    #[test]
    fn skips_punctuation() {
        let syllables = HanRomanizer.romanize("你好！").expect("romanize");
        assert_eq!(texts(&syllables), ["ni3", "hao3"]);
    }

    #[test]
    fn skips_interleaved_latin() {
        let syllables = HanRomanizer.romanize("好ok").expect("romanize");
        assert_eq!(texts(&syllables), ["hao3"]);
    }

    #[test]
    fn umlaut_reading_is_canonicalized() {
        let syllables = HanRomanizer.romanize("绿").expect("romanize");
        assert_eq!(texts(&syllables), ["lv4"]);
    }

    #[test]
    fn default_aligner_matches_free_function() {
        let expected = HanRomanizer.romanize("你好").expect("romanize");
        let actual = HanRomanizer.romanize("你").expect("romanize");
        let via_trait = EditDistanceAligner.align(&expected, &actual);
        let direct = align(&expected, &actual);
        assert_eq!(via_trait.entries, direct.entries);
        assert_eq!(via_trait.edit_distance, direct.edit_distance);
    }
}
