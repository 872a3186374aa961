//! BigShare Tensor Boundary
//!
//! Host-facing layer over the limb codec: shaped batched encoding, identity
//! and metadata passthrough for the host framework's bookkeeping. Accepts and
//! returns plain ordered integer collections, never host tensor types.

mod error;
mod identity;
mod tensor;

pub use error::{Result, TensorError};
pub use identity::{CounterProvider, IdProvider, UuidProvider};
pub use tensor::{BigIntTensor, LimbTensor, TensorMeta};
