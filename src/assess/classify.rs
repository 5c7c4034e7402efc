use crate::assess::score::ComponentTally;
use crate::types::{ErrorCategory, Severity};

/// Below this mismatch fraction an error is slight.
pub(crate) const SLIGHT_BELOW_FRACTION: f64 = 1.0 / 6.0;
/// Above this mismatch fraction an error is severe; between the two bounds
/// (inclusive) it is moderate.
pub(crate) const SEVERE_ABOVE_FRACTION: f64 = 0.5;

/// Assign the error category by priority order, then the severity estimate.
///
/// The order matters: a case with both a wrong tone and a wrong initial must
/// come out as `MultipleErrors`, and any undecomposable actual token forces
/// `RomanizationFallback` regardless of what else matched. The rules are an
/// explicit ordered list so the priority is visible and testable.
pub(crate) fn classify(tally: &ComponentTally) -> (ErrorCategory, Option<Severity>) {
    let category = category_for(tally);
    let severity = match category {
        ErrorCategory::Correct => None,
        _ => Some(severity_for(tally.mismatch_fraction())),
    };
    (category, severity)
}

fn category_for(tally: &ComponentTally) -> ErrorCategory {
    let clean = tally.unmatched_entries == 0;
    let tone = tally.tone_mismatches > 0;
    let initial = tally.initial_mismatches > 0;
    let finals = tally.finals_mismatches > 0;

    if clean && !tone && !initial && !finals {
        return ErrorCategory::Correct;
    }
    if tally.undecomposable_actual > 0 {
        return ErrorCategory::RomanizationFallback;
    }
    if clean && tone && !initial && !finals {
        return ErrorCategory::WrongTone;
    }
    if clean && initial && !tone && !finals {
        return ErrorCategory::WrongInitial;
    }
    if clean && finals && !tone && !initial {
        return ErrorCategory::WrongFinal;
    }
    ErrorCategory::MultipleErrors
}

fn severity_for(fraction: f64) -> Severity {
    if fraction < SLIGHT_BELOW_FRACTION {
        Severity::Slight
    } else if fraction <= SEVERE_ABOVE_FRACTION {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}
