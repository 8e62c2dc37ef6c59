// File: crates/logmap-core/src/error.rs
// Summary: Error type shared by the orbit engine and tick selection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied parameter is outside the component's contract.
    /// The only case today is a negative step count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn negative_steps(steps: i64) -> Self {
        Self::InvalidArgument(format!("step count must be >= 0, got {steps}"))
    }
}
