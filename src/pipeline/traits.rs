use crate::assess::Alignment;
use crate::error::AssessError;
use crate::types::Syllable;

/// Character-to-pinyin conversion seam. The default implementation wraps the
/// `pinyin` crate; tests substitute fixed mappings.
pub trait Romanizer: Send + Sync {
    fn romanize(&self, text: &str) -> Result<Vec<Syllable>, AssessError>;
}

/// Sequence-alignment seam over canonicalized syllables.
pub trait SyllableAligner: Send + Sync {
    fn align(&self, expected: &[Syllable], actual: &[Syllable]) -> Alignment;
}
