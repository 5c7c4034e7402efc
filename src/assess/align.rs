use crate::types::{AlignmentEntry, Syllable};

/// Minimum-edit-distance correspondence between two syllable sequences.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub entries: Vec<AlignmentEntry>,
    /// Total edit operations (substitutions + insertions + deletions).
    pub edit_distance: usize,
}

/// Align expected against actual syllables under unit edit costs.
///
/// Substitution cost is 0 for identical canonical text, else 1; insertion and
/// deletion cost 1. On cost ties the traceback prefers substitution (a
/// Matched entry) over an insert+delete pair, because a Matched pair can
/// still earn partial component credit while unmatched entries earn none.
/// Sequences are single-digit syllable counts, so the O(m·n) table is fine.
pub fn align(expected: &[Syllable], actual: &[Syllable]) -> Alignment {
    let m = expected.len();
    let n = actual.len();

    let mut cost = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in cost.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        cost[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let sub = usize::from(expected[i - 1].text != actual[j - 1].text);
            cost[i][j] = (cost[i - 1][j - 1] + sub)
                .min(cost[i - 1][j] + 1)
                .min(cost[i][j - 1] + 1);
        }
    }

    let mut entries = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let sub = usize::from(expected[i - 1].text != actual[j - 1].text);
            if cost[i][j] == cost[i - 1][j - 1] + sub {
                entries.push(AlignmentEntry::Matched {
                    expected: expected[i - 1].clone(),
                    actual: actual[j - 1].clone(),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && cost[i][j] == cost[i - 1][j] + 1 {
            entries.push(AlignmentEntry::ExpectedOnly {
                expected: expected[i - 1].clone(),
            });
            i -= 1;
        } else {
            entries.push(AlignmentEntry::ActualOnly {
                actual: actual[j - 1].clone(),
            });
            j -= 1;
        }
    }
    entries.reverse();

    Alignment {
        entries,
        edit_distance: cost[m][n],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::tokenization::canonicalize;

    fn syllables(tokens: &[&str]) -> Vec<Syllable> {
        tokens.iter().map(|t| canonicalize(t, None)).collect()
    }

    fn expected_texts(entries: &[AlignmentEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|e| match e {
                AlignmentEntry::Matched { expected, .. }
                | AlignmentEntry::ExpectedOnly { expected } => Some(expected.text.clone()),
                AlignmentEntry::ActualOnly { .. } => None,
            })
            .collect()
    }

    fn actual_texts(entries: &[AlignmentEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|e| match e {
                AlignmentEntry::Matched { actual, .. }
                | AlignmentEntry::ActualOnly { actual } => Some(actual.text.clone()),
                AlignmentEntry::ExpectedOnly { .. } => None,
            })
            .collect()
    }

    #[test]
    fn identical_sequences_align_pairwise() {
        let s = syllables(&["ni3", "hao3"]);
        let alignment = align(&s, &s);
        assert_eq!(alignment.edit_distance, 0);
        assert_eq!(alignment.entries.len(), 2);
        for entry in &alignment.entries {
            match entry {
                AlignmentEntry::Matched { expected, actual } => {
                    assert_eq!(expected.text, actual.text)
                }
                other => panic!("unexpected entry {other:?}"),
            }
        }
    }

    #[test]
    fn dropped_syllable_yields_expected_only() {
        let expected = syllables(&["ni3", "hao3"]);
        let actual = syllables(&["ni3"]);
        let alignment = align(&expected, &actual);
        assert_eq!(alignment.edit_distance, 1);
        assert!(matches!(
            alignment.entries[0],
            AlignmentEntry::Matched { .. }
        ));
        assert!(matches!(
            alignment.entries[1],
            AlignmentEntry::ExpectedOnly { .. }
        ));
    }

    #[test]
    fn inserted_syllable_yields_actual_only() {
        let expected = syllables(&["ni3"]);
        let actual = syllables(&["ni3", "ma5"]);
        let alignment = align(&expected, &actual);
        assert_eq!(alignment.edit_distance, 1);
        assert!(matches!(
            alignment.entries[1],
            AlignmentEntry::ActualOnly { .. }
        ));
    }

    #[test]
    fn substitution_preferred_over_insert_plus_delete() {
        let expected = syllables(&["ma1"]);
        let actual = syllables(&["la1"]);
        let alignment = align(&expected, &actual);
        assert_eq!(alignment.edit_distance, 1);
        assert_eq!(alignment.entries.len(), 1);
        assert!(matches!(
            alignment.entries[0],
            AlignmentEntry::Matched { .. }
        ));
    }

    #[test]
    fn recovers_after_leading_drop() {
        // A positional zip would pair hao3/ma1 against ni3/hao3 and miss both;
        // edit alignment re-synchronizes after the dropped first syllable.
        let expected = syllables(&["ni3", "hao3", "ma1"]);
        let actual = syllables(&["hao3", "ma1"]);
        let alignment = align(&expected, &actual);
        assert_eq!(alignment.edit_distance, 1);
        let matched: Vec<_> = alignment
            .entries
            .iter()
            .filter_map(|e| match e {
                AlignmentEntry::Matched { expected, actual } => {
                    Some((expected.text.as_str(), actual.text.as_str()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(matched, [("hao3", "hao3"), ("ma1", "ma1")]);
    }

    #[test]
    fn both_source_orders_are_preserved() {
        let expected = syllables(&["wo3", "xiang3", "he1", "cha2"]);
        let actual = syllables(&["wo3", "he1", "shui3", "cha2"]);
        let alignment = align(&expected, &actual);
        assert_eq!(
            expected_texts(&alignment.entries),
            expected.iter().map(|s| s.text.clone()).collect::<Vec<_>>()
        );
        assert_eq!(
            actual_texts(&alignment.entries),
            actual.iter().map(|s| s.text.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_actual_is_all_expected_only() {
        let expected = syllables(&["ni3", "hao3"]);
        let alignment = align(&expected, &[]);
        assert_eq!(alignment.edit_distance, 2);
        assert!(alignment
            .entries
            .iter()
            .all(|e| matches!(e, AlignmentEntry::ExpectedOnly { .. })));
    }

    #[test]
    fn distance_matches_reference_levenshtein() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["ni3", "hao3"], &["ni3", "hao3"]),
            (&["ni3", "hao3"], &["li3", "hao3"]),
            (&["ni3", "hao3"], &["ni3"]),
            (&["ma1"], &["ma1", "ma1", "ma1"]),
            (&["wo3", "xiang3", "he1", "cha2"], &["he1", "cha2", "ba5"]),
            (&["a1", "b", "c"], &["x", "y", "z"]),
            (&[], &["ni3"]),
        ];
        for (exp, act) in cases {
            let alignment = align(&syllables(exp), &syllables(act));
            assert_eq!(
                alignment.edit_distance,
                reference_levenshtein(exp, act),
                "distance for {exp:?} vs {act:?}"
            );
        }
    }

    /// Textbook full-matrix Levenshtein, independent of the traceback code.
    fn reference_levenshtein(a: &[&str], b: &[&str]) -> usize {
        let mut prev: Vec<usize> = (0..=b.len()).collect();
        for (i, x) in a.iter().enumerate() {
            let mut curr = vec![i + 1; b.len() + 1];
            for (j, y) in b.iter().enumerate() {
                let sub = prev[j] + usize::from(canonical(x) != canonical(y));
                curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
            }
            prev = curr;
        }
        prev[b.len()]
    }

    fn canonical(token: &str) -> String {
        canonicalize(token, None).text
    }
}
