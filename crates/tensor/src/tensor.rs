//! Host-boundary big-integer tensor
//!
//! `BigIntTensor` pairs a limb codec with host bookkeeping metadata and maps
//! shaped integer collections to limb tensors and back. The limb axis is
//! always appended as the trailing axis, row-major.

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use bigshare_codec::{LimbCodec, OverflowPolicy};

use crate::error::{Result, TensorError};
use crate::identity::{IdProvider, UuidProvider};

/// Host bookkeeping metadata, opaque to the codec
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TensorMeta {
    /// Identifier for the host framework's object table
    pub id: String,
    /// Free-text tags, passed through unchanged
    pub tags: Vec<String>,
    /// Free-text description, passed through unchanged
    pub description: Option<String>,
}

/// An encoded tensor: flat limb buffer plus its shape
///
/// The trailing axis is the limb axis; all other axes carry the original
/// value layout. Limbs within a row are least-significant first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimbTensor {
    /// Row-major limb values
    pub limbs: Vec<BigUint>,
    /// Original shape with the limb count appended
    pub shape: Vec<usize>,
}

impl LimbTensor {
    /// Number of encoded values (product of all axes but the limb axis)
    pub fn value_count(&self) -> usize {
        match self.shape.split_last() {
            Some((_, head)) => head.iter().product(),
            None => 0,
        }
    }

    /// The limbs of the `i`-th value in row-major order
    pub fn limb_row(&self, i: usize) -> Option<&[BigUint]> {
        let width = *self.shape.last()?;
        let start = i.checked_mul(width)?;
        self.limbs.get(start..start + width)
    }
}

/// Encoder handle pairing a limb codec with host metadata
#[derive(Debug, Clone)]
pub struct BigIntTensor {
    codec: LimbCodec,
    meta: TensorMeta,
}

impl BigIntTensor {
    /// Create from codec parameters; `id: None` takes one from the default
    /// UUID provider.
    pub fn new(
        radix: BigUint,
        max_magnitude: BigUint,
        id: Option<String>,
        tags: Vec<String>,
        description: Option<String>,
    ) -> Result<Self> {
        Self::with_provider(radix, max_magnitude, id, tags, description, &UuidProvider)
    }

    /// Create with an injected id provider and overflow policy
    pub fn with_provider(
        radix: BigUint,
        max_magnitude: BigUint,
        id: Option<String>,
        tags: Vec<String>,
        description: Option<String>,
        provider: &dyn IdProvider,
    ) -> Result<Self> {
        let codec = LimbCodec::new(radix, max_magnitude)?;
        Ok(Self::from_codec(codec, id, tags, description, provider))
    }

    /// Wrap an existing codec (e.g. one built with a truncating
    /// [`OverflowPolicy`])
    pub fn from_codec(
        codec: LimbCodec,
        id: Option<String>,
        tags: Vec<String>,
        description: Option<String>,
        provider: &dyn IdProvider,
    ) -> Self {
        let meta = TensorMeta {
            id: id.unwrap_or_else(|| provider.next_id()),
            tags,
            description,
        };
        Self { codec, meta }
    }

    /// Create with the default codec parameters and a fresh UUID
    pub fn with_defaults() -> Self {
        Self::from_codec(
            LimbCodec::with_defaults(),
            None,
            Vec::new(),
            None,
            &UuidProvider,
        )
    }

    /// The underlying limb codec
    pub fn codec(&self) -> &LimbCodec {
        &self.codec
    }

    /// Host metadata
    pub fn meta(&self) -> &TensorMeta {
        &self.meta
    }

    /// The overflow policy of the underlying codec
    pub fn policy(&self) -> OverflowPolicy {
        self.codec.policy()
    }

    /// Encode `values` laid out row-major in `shape`.
    ///
    /// The result's shape is `shape` with the limb count appended. An empty
    /// `shape` encodes a single scalar.
    pub fn encode(&self, values: &[BigInt], shape: &[usize]) -> Result<LimbTensor> {
        let limbs = self.codec.encode_batch(self.checked(values, shape)?)?;
        Ok(self.wrap(limbs, shape))
    }

    /// Parallel variant of [`BigIntTensor::encode`] for large batches
    pub fn encode_par(&self, values: &[BigInt], shape: &[usize]) -> Result<LimbTensor> {
        let limbs = self.codec.encode_batch_par(self.checked(values, shape)?)?;
        Ok(self.wrap(limbs, shape))
    }

    /// Reconstruct the native integers, stripping the trailing limb axis.
    ///
    /// This is the host's "materialize" entry point: the output is a plain
    /// row-major integer collection in the original (pre-encode) shape.
    pub fn materialize(&self, tensor: &LimbTensor) -> Result<Vec<BigUint>> {
        match tensor.shape.last() {
            Some(&axis) if axis == self.codec.limb_count() => {}
            last => {
                return Err(TensorError::MissingLimbAxis {
                    limb_count: self.codec.limb_count(),
                    got: last.copied(),
                })
            }
        }
        // A deserialized tensor can declare a shape its limb buffer does not
        // actually fill; reject it before decoding.
        let expected: usize = tensor.shape.iter().product();
        if expected != tensor.limbs.len() {
            return Err(TensorError::ShapeMismatch {
                shape: tensor.shape.clone(),
                expected,
                got: tensor.limbs.len(),
            });
        }
        Ok(self.codec.decode_batch(&tensor.limbs)?)
    }

    fn checked<'a>(&self, values: &'a [BigInt], shape: &[usize]) -> Result<&'a [BigInt]> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(TensorError::ShapeMismatch {
                shape: shape.to_vec(),
                expected,
                got: values.len(),
            });
        }
        Ok(values)
    }

    fn wrap(&self, limbs: Vec<BigUint>, shape: &[usize]) -> LimbTensor {
        let mut out_shape = shape.to_vec();
        out_shape.push(self.codec.limb_count());
        LimbTensor {
            limbs,
            shape: out_shape,
        }
    }
}
