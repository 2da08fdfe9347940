//! Error types for the cell API.

use thiserror::Error;

/// Errors a cell can report.
///
/// All operations are total over their documented domains; the only thing
/// worth rejecting is a stimulus that is not a finite number, since
/// `tanh(NaN)` would poison `activation` and `fatigue` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CellError {
    /// The stimulus was NaN or infinite. The cell state is left untouched.
    #[error("non-finite stimulus rejected: {0}")]
    NonFiniteStimulus(f32),
}
