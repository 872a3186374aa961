//! Tensor boundary error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("Codec error: {0}")]
    Codec(#[from] bigshare_codec::CodecError),

    #[error("Shape mismatch: shape {shape:?} implies {expected} values, got {got}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    #[error("Missing limb axis: trailing axis must be {limb_count}, got {got:?}")]
    MissingLimbAxis {
        limb_count: usize,
        got: Option<usize>,
    },
}

pub type Result<T> = std::result::Result<T, TensorError>;
