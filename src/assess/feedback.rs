use crate::types::{AlignmentEntry, ComponentDiff, ComponentKind, ErrorCategory, Severity};

/// Spelled-out tone names used in feedback text.
pub(crate) fn tone_name(tone: u8) -> &'static str {
    match tone {
        1 => "first tone (flat)",
        2 => "second tone (rising)",
        3 => "third tone (fall-rise)",
        4 => "fourth tone (falling)",
        5 => "neutral tone",
        _ => "unknown tone",
    }
}

/// Render the one-line summary for a classified assessment.
///
/// Fixed template per category; every clause names the syllable index and the
/// component values involved, so the text is reproducible from the diff list.
pub(crate) fn format_summary(
    category: ErrorCategory,
    severity: Option<Severity>,
    entries: &[AlignmentEntry],
    diffs: &[ComponentDiff],
) -> String {
    let sev = severity
        .map(|s| format!(" ({})", s.as_str()))
        .unwrap_or_default();

    match category {
        ErrorCategory::Correct => {
            format!("Perfect pronunciation: all {} syllable(s) match.", entries.len())
        }
        ErrorCategory::WrongTone => {
            format!("Tone error{sev}: {}.", mismatch_clauses(diffs, Some(ComponentKind::Tone)))
        }
        ErrorCategory::WrongInitial => format!(
            "Initial error{sev}: {}.",
            mismatch_clauses(diffs, Some(ComponentKind::Initial))
        ),
        ErrorCategory::WrongFinal => format!(
            "Finals error{sev}: {}.",
            mismatch_clauses(diffs, Some(ComponentKind::Finals))
        ),
        ErrorCategory::RomanizationFallback => {
            let tokens = undecomposable_tokens(entries);
            format!(
                "Romanization fallback{sev}: could not read {} as pinyin.",
                quoted_list(&tokens)
            )
        }
        ErrorCategory::MultipleErrors => {
            let mut clauses = Vec::new();
            let component = mismatch_clauses(diffs, None);
            if !component.is_empty() {
                clauses.push(component);
            }
            for entry in entries {
                match entry {
                    AlignmentEntry::ExpectedOnly { expected } => {
                        clauses.push(format!("missing syllable '{}'", expected.text));
                    }
                    AlignmentEntry::ActualOnly { actual } => {
                        clauses.push(format!("extra syllable '{}'", actual.text));
                    }
                    AlignmentEntry::Matched { .. } => {}
                }
            }
            format!("Multiple errors{sev}: {}.", clauses.join("; "))
        }
    }
}

/// One clause per mismatched diff, optionally restricted to a component kind.
fn mismatch_clauses(diffs: &[ComponentDiff], only: Option<ComponentKind>) -> String {
    diffs
        .iter()
        .filter(|d| !d.matched && only.map_or(true, |kind| d.kind == kind))
        .map(clause)
        .collect::<Vec<_>>()
        .join("; ")
}

fn clause(diff: &ComponentDiff) -> String {
    match diff.kind {
        ComponentKind::Tone => format!(
            "syllable {} tone expected {}, heard {}",
            diff.syllable_index,
            tone_value_name(&diff.expected),
            tone_value_name(&diff.actual)
        ),
        kind => format!(
            "syllable {} {} expected {}, heard {}",
            diff.syllable_index,
            kind.as_str(),
            quoted(&diff.expected),
            quoted(&diff.actual)
        ),
    }
}

fn tone_value_name(value: &str) -> String {
    match value.parse::<u8>() {
        Ok(tone) => tone_name(tone).to_string(),
        Err(_) => quoted(value),
    }
}

fn quoted(value: &str) -> String {
    if value.is_empty() {
        "(none)".to_string()
    } else {
        format!("'{value}'")
    }
}

fn quoted_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return "the transcription".to_string();
    }
    tokens
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn undecomposable_tokens(entries: &[AlignmentEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            AlignmentEntry::Matched { actual, .. } | AlignmentEntry::ActualOnly { actual } => {
                (!actual.is_decomposable()).then(|| actual.text.clone())
            }
            AlignmentEntry::ExpectedOnly { .. } => None,
        })
        .collect()
}
