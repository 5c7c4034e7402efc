pub mod assess;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::{AssessConfig, UnmatchedPolicy};
pub use error::AssessError;
pub use pipeline::builder::AssessorBuilder;
pub use pipeline::runtime::Assessor;
pub use pipeline::traits::{Romanizer, SyllableAligner};
pub use types::{
    AlignmentEntry, AssessmentResult, ComponentDiff, ComponentKind, Decomposition, ErrorCategory,
    Severity, Syllable,
};
