use serde::Serialize;

/// One syllable token after tokenization and canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Syllable {
    /// Canonical numeric-tone pinyin (e.g. "ni3") when the token decomposes,
    /// otherwise the lowercased raw token.
    pub text: String,
    /// Source Han character, when the token came from character conversion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hanzi: Option<char>,
    /// Phonetic split, absent for tokens that are not valid pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<Decomposition>,
}

impl Syllable {
    pub fn is_decomposable(&self) -> bool {
        self.decomposition.is_some()
    }
}

/// The (initial, finals, tone) split of one syllable.
///
/// Mandarin syllable structure is (Initial) + Finals + Tone: the initial
/// consonant may be empty (zero-initial syllables like "ai"), the finals
/// never are, and tone 5 denotes the neutral/unmarked tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub initial: String,
    pub finals: String,
    pub tone: u8,
}

impl Decomposition {
    /// Canonical `initial + finals + tone digit` spelling (e.g. "zh"+"i"+1 → "zhi1").
    pub fn recompose(&self) -> String {
        format!("{}{}{}", self.initial, self.finals, self.tone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Initial,
    Finals,
    Tone,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Initial,
        ComponentKind::Finals,
        ComponentKind::Tone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Initial => "initial",
            ComponentKind::Finals => "finals",
            ComponentKind::Tone => "tone",
        }
    }
}

/// One position of the expected/actual correspondence produced by alignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignmentEntry {
    Matched { expected: Syllable, actual: Syllable },
    ExpectedOnly { expected: Syllable },
    ActualOnly { actual: Syllable },
}

/// Expected-vs-actual comparison of one component at one aligned position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDiff {
    /// Index into the alignment entry list.
    pub syllable_index: usize,
    pub kind: ComponentKind,
    pub expected: String,
    pub actual: String,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Correct,
    RomanizationFallback,
    WrongTone,
    WrongInitial,
    WrongFinal,
    MultipleErrors,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Correct => "correct",
            ErrorCategory::RomanizationFallback => "romanization_fallback",
            ErrorCategory::WrongTone => "wrong_tone",
            ErrorCategory::WrongInitial => "wrong_initial",
            ErrorCategory::WrongFinal => "wrong_final",
            ErrorCategory::MultipleErrors => "multiple_errors",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Slight,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Slight => "slight",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// Immutable outcome of one assessment call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    /// Fraction of matched phonetic components, in [0, 100], one decimal.
    pub score: f64,
    pub category: ErrorCategory,
    /// Absent when the pronunciation is fully correct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Space-joined canonical expected syllables (e.g. "ni3 hao3").
    pub expected_pinyin: String,
    pub actual_pinyin: String,
    pub alignment: Vec<AlignmentEntry>,
    /// Component comparisons for Matched entries only; unmatched entries
    /// earn no component credit.
    pub component_diffs: Vec<ComponentDiff>,
    pub summary: String,
}
