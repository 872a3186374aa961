//! Harness error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Codec error: {0}")]
    Codec(#[from] bigshare_codec::CodecError),

    #[error("Tensor error: {0}")]
    Tensor(#[from] bigshare_tensor::TensorError),

    #[error("Verification failed: {message}")]
    VerificationFailed { message: String },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
