//! Cross-validation of the production codec against the reference formulas

use num_bigint::BigInt;

use bigshare_codec::LimbCodec;

use crate::error::{HarnessError, Result};
use crate::reference::{reference_decode, reference_encode};

/// Check that the codec's limbs match the closed-form reference for every
/// value, and that both decoders reconstruct the original.
pub fn verify_batch(codec: &LimbCodec, values: &[BigInt]) -> Result<()> {
    for value in values {
        let limbs = codec.encode(value)?;
        let expected = reference_encode(codec.radix(), codec.limb_count(), value.magnitude());
        if limbs != expected {
            return Err(HarnessError::VerificationFailed {
                message: format!(
                    "limb mismatch for {}: codec {:?}, reference {:?}",
                    value, limbs, expected
                ),
            });
        }

        let decoded = codec.decode(&limbs)?;
        if &decoded != value.magnitude() {
            return Err(HarnessError::VerificationFailed {
                message: format!("decode mismatch for {}: got {}", value, decoded),
            });
        }
        if reference_decode(codec.radix(), &limbs) != decoded {
            return Err(HarnessError::VerificationFailed {
                message: format!("reference decode disagrees for {}", value),
            });
        }
    }
    Ok(())
}

/// Round-trip a single value through the codec
pub fn verify_roundtrip(codec: &LimbCodec, value: &BigInt) -> Result<()> {
    verify_batch(codec, std::slice::from_ref(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn test_verify_decimal_range() {
        let codec = LimbCodec::new(BigUint::from(10u32), BigUint::from(1000u32)).unwrap();
        let values: Vec<BigInt> = (0..1000).map(BigInt::from).collect();
        verify_batch(&codec, &values).unwrap();
    }

    #[test]
    fn test_verify_default_codec_powers_of_two() {
        let codec = LimbCodec::with_defaults();
        let values: Vec<BigInt> = (0u32..128)
            .map(|i| BigInt::from(BigUint::one() << i))
            .collect();
        verify_batch(&codec, &values).unwrap();
    }
}
