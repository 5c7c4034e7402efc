use crate::error::AssessError;
use crate::types::Decomposition;

/// Mandarin initials, longest first so maximal munch sees "zh" before "z".
const INITIALS: &[&str] = &[
    "zh", "ch", "sh", // retroflexes, two letters
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r", "z", "c", "s", "y",
    "w",
];

/// Standard pinyin finals after normalization ("ü" spelled as "v").
const FINALS: &[&str] = &[
    "a", "o", "e", "i", "u", "v", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "er",
    "ia", "ie", "iao", "iu", "iou", "ian", "in", "iang", "ing", "iong", "ua", "uo", "uai", "ui",
    "uei", "uan", "un", "uen", "uang", "ueng", "ue", "ve", "van", "vn",
];

/// Break one pinyin token into (initial, finals, tone).
///
/// Accepts trailing numeric tones ("hao3") and tone-mark diacritics ("hǎo"),
/// normalizing both to the same split. A missing tone is the neutral tone 5.
/// Fails when the token is not a standard pinyin syllable; that failure is
/// what the classifier uses to detect romanization-fallback transcriptions.
pub fn decompose(token: &str) -> Result<Decomposition, AssessError> {
    let lowered = token.to_lowercase();

    let mut base = String::with_capacity(lowered.len());
    let mut mark_tone: Option<u8> = None;
    for c in lowered.chars() {
        if let Some((plain, tone)) = strip_tone_mark(c) {
            if tone != 0 {
                if mark_tone.is_some() {
                    return Err(AssessError::decomposition(token, "multiple tone marks"));
                }
                mark_tone = Some(tone);
            }
            base.push(plain);
            continue;
        }
        base.push(c);
    }

    let digit_tone = match base.chars().last() {
        Some(c) if c.is_ascii_digit() => {
            base.pop();
            let tone = c as u8 - b'0';
            if !(1..=5).contains(&tone) {
                return Err(AssessError::decomposition(token, "tone digit out of 1..=5"));
            }
            Some(tone)
        }
        _ => None,
    };

    let tone = match (mark_tone, digit_tone) {
        (Some(_), Some(_)) => {
            return Err(AssessError::decomposition(
                token,
                "both tone mark and tone digit",
            ))
        }
        (Some(t), None) | (None, Some(t)) => t,
        (None, None) => 5,
    };

    if base.is_empty() {
        return Err(AssessError::decomposition(token, "empty syllable"));
    }
    if !base.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(AssessError::decomposition(token, "not pinyin letters"));
    }

    let initial = INITIALS
        .iter()
        .find(|init| base.starts_with(**init))
        .copied()
        .unwrap_or("");
    let finals = &base[initial.len()..];
    if finals.is_empty() {
        return Err(AssessError::decomposition(token, "missing finals"));
    }
    if !FINALS.contains(&finals) {
        return Err(AssessError::decomposition(
            token,
            format!("'{finals}' is not a standard finals"),
        ));
    }
    // The i/u/ü rows never stand alone: standard orthography spells them
    // with y/w (yi, wu, yu, yan, wen, ...).
    if initial.is_empty() && finals.starts_with(['i', 'u', 'v']) {
        return Err(AssessError::decomposition(
            token,
            format!("'{finals}' requires a y/w spelling without an initial"),
        ));
    }

    Ok(Decomposition {
        initial: initial.to_string(),
        finals: finals.to_string(),
        tone,
    })
}

/// Map one tone-marked vowel to its plain form and tone number.
/// Tone 0 means "no tone carried" (bare "ü" → "v").
fn strip_tone_mark(c: char) -> Option<(char, u8)> {
    let (plain, tone) = match c {
        'ā' => ('a', 1), 'á' => ('a', 2), 'ǎ' => ('a', 3), 'à' => ('a', 4),
        'ē' => ('e', 1), 'é' => ('e', 2), 'ě' => ('e', 3), 'è' => ('e', 4),
        'ī' => ('i', 1), 'í' => ('i', 2), 'ǐ' => ('i', 3), 'ì' => ('i', 4),
        'ō' => ('o', 1), 'ó' => ('o', 2), 'ǒ' => ('o', 3), 'ò' => ('o', 4),
        'ū' => ('u', 1), 'ú' => ('u', 2), 'ǔ' => ('u', 3), 'ù' => ('u', 4),
        'ǖ' => ('v', 1), 'ǘ' => ('v', 2), 'ǚ' => ('v', 3), 'ǜ' => ('v', 4),
        'ü' => ('v', 0),
        _ => return None,
    };
    Some((plain, tone))
}
