//! Limb codec scalar operations

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{CodecError, Result};

/// Default radix, `2^63 - 1` (the largest value one signed 64-bit limb holds)
pub fn default_radix() -> BigUint {
    (BigUint::one() << 63u32) - BigUint::one()
}

/// Default maximum magnitude, `2^128`
pub fn default_max_magnitude() -> BigUint {
    BigUint::one() << 128u32
}

/// Behavior when `encode` receives a value of `radix^limb_count` or more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with `MagnitudeOverflow`
    #[default]
    Strict,
    /// Keep the low-order `limb_count` limbs, silently discarding the
    /// high-order magnitude (callers must pre-validate their values)
    Truncate,
}

/// A codec turning non-negative integers into fixed-length limb sequences
///
/// Parameterized by a radix and a maximum representable magnitude; the number
/// of limbs is derived once at construction and fixed for the codec's
/// lifetime. Immutable after construction, so a single codec can be shared
/// across threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimbCodec {
    radix: BigUint,
    max_magnitude: BigUint,
    limb_count: usize,
    /// radix^limb_count, the exclusive bound on losslessly encodable values
    capacity: BigUint,
    policy: OverflowPolicy,
}

/// Smallest `n >= 1` with `radix^n >= max_magnitude`, plus `radix^n`.
///
/// Uses exact integer exponentiation rather than a logarithm so the count is
/// correct for magnitudes far beyond floating-point precision. The floor of
/// one limb keeps degenerate bounds (`max_magnitude <= 1`) encodable: a
/// zero-length limb sequence could not represent even the value 0.
fn derive_limb_count(radix: &BigUint, max_magnitude: &BigUint) -> (usize, BigUint) {
    let mut limb_count = 1;
    let mut capacity = radix.clone();
    while &capacity < max_magnitude {
        capacity *= radix;
        limb_count += 1;
    }
    (limb_count, capacity)
}

impl LimbCodec {
    /// Create a codec with the default strict overflow policy
    pub fn new(radix: BigUint, max_magnitude: BigUint) -> Result<Self> {
        Self::with_policy(radix, max_magnitude, OverflowPolicy::default())
    }

    /// Create a codec with an explicit overflow policy
    pub fn with_policy(
        radix: BigUint,
        max_magnitude: BigUint,
        policy: OverflowPolicy,
    ) -> Result<Self> {
        if radix < BigUint::from(2u32) {
            return Err(CodecError::InvalidRadix { radix });
        }
        if max_magnitude.is_zero() {
            return Err(CodecError::InvalidMaxMagnitude);
        }

        let (limb_count, capacity) = derive_limb_count(&radix, &max_magnitude);

        Ok(Self {
            radix,
            max_magnitude,
            limb_count,
            capacity,
            policy,
        })
    }

    /// Create a codec with the default parameters (`2^63 - 1`, `2^128`)
    pub fn with_defaults() -> Self {
        let radix = default_radix();
        let max_magnitude = default_max_magnitude();
        let (limb_count, capacity) = derive_limb_count(&radix, &max_magnitude);

        Self {
            radix,
            max_magnitude,
            limb_count,
            capacity,
            policy: OverflowPolicy::default(),
        }
    }

    /// The base of each limb
    pub fn radix(&self) -> &BigUint {
        &self.radix
    }

    /// The configured upper bound on encoded values
    pub fn max_magnitude(&self) -> &BigUint {
        &self.max_magnitude
    }

    /// Number of limbs in every encoded sequence
    pub fn limb_count(&self) -> usize {
        self.limb_count
    }

    /// `radix^limb_count`, the exclusive bound on losslessly encodable values
    pub fn capacity(&self) -> &BigUint {
        &self.capacity
    }

    /// The overflow policy fixed at construction
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Encode a non-negative integer as `limb_count` limbs,
    /// least-significant first, each in `[0, radix)`.
    pub fn encode(&self, value: &BigInt) -> Result<Vec<BigUint>> {
        if value.sign() == Sign::Minus {
            return Err(CodecError::NegativeValue {
                value: value.clone(),
            });
        }

        let mut rest = value.magnitude().clone();
        if self.policy == OverflowPolicy::Strict && rest >= self.capacity {
            return Err(CodecError::MagnitudeOverflow {
                limb_count: self.limb_count,
            });
        }

        let mut limbs = Vec::with_capacity(self.limb_count);
        for _ in 0..self.limb_count {
            limbs.push(&rest % &self.radix);
            rest = rest / &self.radix;
        }
        // Truncate mode drops whatever magnitude is left in `rest`.
        Ok(limbs)
    }

    /// Decode a limb sequence back to the integer it encodes.
    ///
    /// The sequence must hold exactly `limb_count` limbs. Limb values are not
    /// range-checked: a sequence with limbs at or above the radix, or one
    /// encoding a value beyond `max_magnitude`, still reconstructs to
    /// `sum_i radix^i * limb[i]`.
    pub fn decode(&self, limbs: &[BigUint]) -> Result<BigUint> {
        if limbs.len() != self.limb_count {
            return Err(CodecError::LengthMismatch {
                expected: self.limb_count,
                got: limbs.len(),
            });
        }

        // Horner evaluation from the most-significant limb down
        let mut value = BigUint::zero();
        for limb in limbs.iter().rev() {
            value = value * &self.radix + limb;
        }
        Ok(value)
    }
}
