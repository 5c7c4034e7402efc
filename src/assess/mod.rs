pub mod align;
pub mod decompose;
pub mod tokenization;

pub(crate) mod classify;
pub(crate) mod feedback;
pub(crate) mod score;

pub use align::{align, Alignment};
pub use decompose::decompose;
