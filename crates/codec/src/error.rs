//! Limb codec error types

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid radix {radix}: must be at least 2")]
    InvalidRadix { radix: BigUint },

    #[error("Invalid maximum magnitude: must be positive")]
    InvalidMaxMagnitude,

    #[error("Cannot encode negative value {value}")]
    NegativeValue { value: BigInt },

    #[error("Limb count mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Ragged limb buffer: length {got} is not a multiple of {limb_count}")]
    RaggedBuffer { limb_count: usize, got: usize },

    #[error("Magnitude overflow: value does not fit in {limb_count} limbs")]
    MagnitudeOverflow { limb_count: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
