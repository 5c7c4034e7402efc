use crate::config::AssessConfig;
use crate::pipeline::defaults::{EditDistanceAligner, HanRomanizer};
use crate::pipeline::runtime::{Assessor, AssessorParts};
use crate::pipeline::traits::{Romanizer, SyllableAligner};

pub struct AssessorBuilder {
    config: AssessConfig,
    romanizer: Option<Box<dyn Romanizer>>,
    aligner: Option<Box<dyn SyllableAligner>>,
}

impl AssessorBuilder {
    pub fn new(config: AssessConfig) -> Self {
        Self {
            config,
            romanizer: None,
            aligner: None,
        }
    }

    pub fn with_romanizer(mut self, romanizer: Box<dyn Romanizer>) -> Self {
        self.romanizer = Some(romanizer);
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn SyllableAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn build(self) -> Assessor {
        Assessor::from_parts(AssessorParts {
            config: self.config,
            romanizer: self.romanizer.unwrap_or_else(|| Box::new(HanRomanizer)),
            aligner: self.aligner.unwrap_or_else(|| Box::new(EditDistanceAligner)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssessError;
    use crate::types::{ErrorCategory, Syllable};

    struct FixedRomanizer(Vec<&'static str>);

    impl Romanizer for FixedRomanizer {
        fn romanize(&self, _text: &str) -> Result<Vec<Syllable>, AssessError> {
            Ok(self
                .0
                .iter()
                .map(|t| crate::assess::tokenization::canonicalize(t, None))
                .collect())
        }
    }

    #[test]
    fn builder_defaults_are_usable() {
        let assessor = AssessorBuilder::new(AssessConfig::default()).build();
        let result = assessor.assess("ma1", "ma1").expect("assess");
        assert_eq!(result.category, ErrorCategory::Correct);
    }

    #[test]
    fn custom_romanizer_is_used_for_han_text() {
        let assessor = AssessorBuilder::new(AssessConfig::default())
            .with_romanizer(Box::new(FixedRomanizer(vec!["ma1"])))
            .build();
        let result = assessor.assess("妈", "ma4").expect("assess");
        assert_eq!(result.category, ErrorCategory::WrongTone);
        assert_eq!(result.expected_pinyin, "ma1");
    }
}
