use crate::config::UnmatchedPolicy;
use crate::types::{AlignmentEntry, ComponentDiff, ComponentKind, Syllable};

const COMPONENTS_PER_SYLLABLE: usize = 3;

/// Component-level bookkeeping for one assessment, consumed by the
/// classifier and the severity estimate.
#[derive(Debug, Clone, Default)]
pub(crate) struct ComponentTally {
    pub matched_entries: usize,
    pub unmatched_entries: usize,
    /// Actual-side tokens that are not valid pinyin (fallback markers),
    /// whether they aligned as Matched or ActualOnly.
    pub undecomposable_actual: usize,
    pub initial_mismatches: usize,
    pub finals_mismatches: usize,
    pub tone_mismatches: usize,
    pub equal_components: usize,
}

impl ComponentTally {
    pub(crate) fn mismatched_components(&self) -> usize {
        self.initial_mismatches + self.finals_mismatches + self.tone_mismatches
    }

    /// Fraction of wrong components with unmatched entries counted as three
    /// failures each, independent of the scoring policy.
    pub(crate) fn mismatch_fraction(&self) -> f64 {
        let total =
            COMPONENTS_PER_SYLLABLE * (self.matched_entries + self.unmatched_entries);
        if total == 0 {
            return 0.0;
        }
        let wrong = self.mismatched_components()
            + COMPONENTS_PER_SYLLABLE * self.unmatched_entries;
        wrong as f64 / total as f64
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ScoreOutcome {
    /// In [0, 100], rounded to one decimal; 0.0 when nothing matched.
    pub score: f64,
    pub diffs: Vec<ComponentDiff>,
    pub tally: ComponentTally,
}

/// Compare components across all Matched entries and derive the score.
///
/// Only Matched entries carry component comparisons. Under
/// [`UnmatchedPolicy::ExcludeUnmatched`] the denominator is three components
/// per Matched entry; under [`UnmatchedPolicy::CountAsErrors`] unmatched
/// entries add three failed components each.
pub(crate) fn score(entries: &[AlignmentEntry], policy: UnmatchedPolicy) -> ScoreOutcome {
    let mut tally = ComponentTally::default();
    let mut diffs = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let (expected, actual) = match entry {
            AlignmentEntry::Matched { expected, actual } => (expected, actual),
            AlignmentEntry::ExpectedOnly { .. } => {
                tally.unmatched_entries += 1;
                continue;
            }
            AlignmentEntry::ActualOnly { actual } => {
                tally.unmatched_entries += 1;
                if !actual.is_decomposable() {
                    tally.undecomposable_actual += 1;
                }
                continue;
            }
        };
        tally.matched_entries += 1;

        match (&expected.decomposition, &actual.decomposition) {
            (Some(exp), Some(act)) => {
                for kind in ComponentKind::ALL {
                    let (exp_value, act_value) = match kind {
                        ComponentKind::Initial => (exp.initial.clone(), act.initial.clone()),
                        ComponentKind::Finals => (exp.finals.clone(), act.finals.clone()),
                        ComponentKind::Tone => (exp.tone.to_string(), act.tone.to_string()),
                    };
                    let matched = exp_value == act_value;
                    if matched {
                        tally.equal_components += 1;
                    } else {
                        match kind {
                            ComponentKind::Initial => tally.initial_mismatches += 1,
                            ComponentKind::Finals => tally.finals_mismatches += 1,
                            ComponentKind::Tone => tally.tone_mismatches += 1,
                        }
                    }
                    diffs.push(ComponentDiff {
                        syllable_index: index,
                        kind,
                        expected: exp_value,
                        actual: act_value,
                        matched,
                    });
                }
            }
            _ => {
                // No phonetic split on one side: all three components fail.
                tally.undecomposable_actual += 1;
                tally.initial_mismatches += 1;
                tally.finals_mismatches += 1;
                tally.tone_mismatches += 1;
                push_opaque_diffs(&mut diffs, index, expected, actual);
            }
        }
    }

    let scoreable = match policy {
        UnmatchedPolicy::ExcludeUnmatched => COMPONENTS_PER_SYLLABLE * tally.matched_entries,
        UnmatchedPolicy::CountAsErrors => {
            COMPONENTS_PER_SYLLABLE * (tally.matched_entries + tally.unmatched_entries)
        }
    };
    let score = if scoreable == 0 {
        0.0
    } else {
        round1(100.0 * tally.equal_components as f64 / scoreable as f64)
    };

    ScoreOutcome {
        score,
        diffs,
        tally,
    }
}

/// Diffs for a pair whose actual side has no phonetic split: the expected
/// components are shown against the raw actual token.
fn push_opaque_diffs(
    diffs: &mut Vec<ComponentDiff>,
    index: usize,
    expected: &Syllable,
    actual: &Syllable,
) {
    for kind in ComponentKind::ALL {
        let exp_value = match (&expected.decomposition, kind) {
            (Some(d), ComponentKind::Initial) => d.initial.clone(),
            (Some(d), ComponentKind::Finals) => d.finals.clone(),
            (Some(d), ComponentKind::Tone) => d.tone.to_string(),
            (None, _) => expected.text.clone(),
        };
        diffs.push(ComponentDiff {
            syllable_index: index,
            kind,
            expected: exp_value,
            actual: actual.text.clone(),
            matched: false,
        });
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
