use serde::Serialize;

/// How unmatched (inserted/dropped) syllables affect the score denominator.
///
/// The default excludes them: only Matched alignment entries contribute
/// scoreable components, so a dropped syllable changes the category (never
/// `Correct`) but not the per-component score of what was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Unmatched entries contribute nothing to the denominator.
    ExcludeUnmatched,
    /// Unmatched entries count as three automatically failed components each.
    CountAsErrors,
}

#[derive(Debug, Clone)]
pub struct AssessConfig {
    pub unmatched_policy: UnmatchedPolicy,
}

impl AssessConfig {
    pub const DEFAULT_UNMATCHED_POLICY: UnmatchedPolicy = UnmatchedPolicy::ExcludeUnmatched;
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            unmatched_policy: Self::DEFAULT_UNMATCHED_POLICY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_excludes_unmatched() {
        let config = AssessConfig::default();
        assert_eq!(config.unmatched_policy, UnmatchedPolicy::ExcludeUnmatched);
    }
}
