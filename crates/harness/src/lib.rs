//! BigShare Test Harness
//!
//! Independent closed-form reference implementation of limb encoding and
//! cross-validation helpers for checking the production codec against it.

mod error;
mod reference;
mod verify;

pub use error::{HarnessError, Result};
pub use reference::{reference_decode, reference_encode};
pub use verify::{verify_batch, verify_roundtrip};
