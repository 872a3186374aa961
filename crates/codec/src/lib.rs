//! BigShare Limb Codec
//!
//! Positional-radix decomposition of arbitrarily large non-negative integers
//! into fixed-length sequences of limbs ("shares"), and exact reconstruction.
//! Limbs are plain positional digits, not cryptographic secret shares.

mod batch;
mod codec;
mod error;

pub use codec::{default_max_magnitude, default_radix, LimbCodec, OverflowPolicy};
pub use error::{CodecError, Result};
