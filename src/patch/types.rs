use thiserror::Error;

/// Why an edit script could not be replayed against a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("element {index} of the original sequence does not match the script")]
    Mismatch { index: usize },
    #[error("the script consumes element {index}, past the end of the original sequence")]
    Exhausted { index: usize },
    #[error("{remaining} elements of the original sequence are not covered by the script")]
    Unconsumed { remaining: usize },
}
