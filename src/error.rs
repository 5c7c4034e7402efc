use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessError {
    #[error("cannot decompose '{token}': {message}")]
    Decomposition { token: String, message: String },
    #[error("empty input: {side} side has no syllables")]
    EmptyInput { side: &'static str },
}

impl AssessError {
    pub(crate) fn decomposition(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decomposition {
            token: token.into(),
            message: message.into(),
        }
    }

    pub(crate) fn empty_input(side: &'static str) -> Self {
        Self::EmptyInput { side }
    }
}
