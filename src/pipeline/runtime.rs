use crate::assess::classify::classify;
use crate::assess::decompose::decompose;
use crate::assess::feedback::format_summary;
use crate::assess::score::score;
use crate::assess::tokenization::{canonicalize, contains_han, split_romanized};
use crate::config::AssessConfig;
use crate::error::AssessError;
use crate::pipeline::traits::{Romanizer, SyllableAligner};
use crate::types::{AssessmentResult, Syllable};

/// The assembled assessment pipeline: tokenize → decompose → align → score →
/// classify → format. Stateless across calls; every call produces a freshly
/// owned [`AssessmentResult`].
pub struct Assessor {
    config: AssessConfig,
    romanizer: Box<dyn Romanizer>,
    aligner: Box<dyn SyllableAligner>,
}

pub(crate) struct AssessorParts {
    pub config: AssessConfig,
    pub romanizer: Box<dyn Romanizer>,
    pub aligner: Box<dyn SyllableAligner>,
}

impl Assessor {
    pub(crate) fn from_parts(parts: AssessorParts) -> Self {
        Self {
            config: parts.config,
            romanizer: parts.romanizer,
            aligner: parts.aligner,
        }
    }

    /// Assess an actually transcribed utterance against the expected one.
    ///
    /// Either argument may be Han text or already-romanized pinyin. The
    /// expected side must tokenize into valid pinyin; actual-side tokens that
    /// are not valid pinyin are kept as fallback markers and classified, not
    /// rejected.
    pub fn assess(&self, expected: &str, actual: &str) -> Result<AssessmentResult, AssessError> {
        let expected_syllables = self.tokenize(expected)?;
        if expected_syllables.is_empty() {
            return Err(AssessError::empty_input("expected"));
        }
        for syllable in &expected_syllables {
            if !syllable.is_decomposable() {
                // Re-run decomposition to surface the precise failure.
                decompose(&syllable.text)?;
            }
        }

        let actual_syllables = self.tokenize(actual)?;
        if actual_syllables.is_empty() {
            return Err(AssessError::empty_input("actual"));
        }
        if actual_syllables.iter().any(|s| !s.is_decomposable()) {
            tracing::warn!(
                actual,
                "transcription contains non-pinyin tokens; likely romanization fallback"
            );
        }

        let alignment = self.aligner.align(&expected_syllables, &actual_syllables);
        tracing::debug!(
            expected_count = expected_syllables.len(),
            actual_count = actual_syllables.len(),
            edit_distance = alignment.edit_distance,
            "aligned syllable sequences"
        );

        let outcome = score(&alignment.entries, self.config.unmatched_policy);
        let (category, severity) = classify(&outcome.tally);
        tracing::debug!(
            score = outcome.score,
            category = category.as_str(),
            "assessment classified"
        );
        let summary = format_summary(category, severity, &alignment.entries, &outcome.diffs);

        Ok(AssessmentResult {
            score: outcome.score,
            category,
            severity,
            expected_pinyin: joined_text(&expected_syllables),
            actual_pinyin: joined_text(&actual_syllables),
            alignment: alignment.entries,
            component_diffs: outcome.diffs,
            summary,
        })
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Syllable>, AssessError> {
        if contains_han(text) {
            return self.romanizer.romanize(text);
        }
        Ok(split_romanized(text)
            .iter()
            .map(|token| canonicalize(token, None))
            .collect())
    }
}

fn joined_text(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
