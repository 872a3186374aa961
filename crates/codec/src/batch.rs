//! Batched encode/decode over independent values
//!
//! Pure elementwise application of the scalar codec: no cross-element state,
//! input order preserved, whole batch fails on the first bad element.

use num_bigint::{BigInt, BigUint};
use rayon::prelude::*;

use crate::codec::LimbCodec;
use crate::error::{CodecError, Result};

impl LimbCodec {
    /// Encode each value and flatten the limbs in input order.
    ///
    /// The output holds `values.len() * limb_count` limbs, each value's
    /// limbs consecutive and least-significant first.
    pub fn encode_batch(&self, values: &[BigInt]) -> Result<Vec<BigUint>> {
        let mut limbs = Vec::with_capacity(values.len() * self.limb_count());
        for value in values {
            limbs.extend(self.encode(value)?);
        }
        Ok(limbs)
    }

    /// Parallel variant of [`LimbCodec::encode_batch`] with identical output
    pub fn encode_batch_par(&self, values: &[BigInt]) -> Result<Vec<BigUint>> {
        let rows: Vec<Vec<BigUint>> = values
            .par_iter()
            .map(|value| self.encode(value))
            .collect::<Result<_>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Decode a flat limb buffer of consecutive `limb_count`-sized rows.
    ///
    /// The buffer length must be a multiple of `limb_count`.
    pub fn decode_batch(&self, limbs: &[BigUint]) -> Result<Vec<BigUint>> {
        if limbs.len() % self.limb_count() != 0 {
            return Err(CodecError::RaggedBuffer {
                limb_count: self.limb_count(),
                got: limbs.len(),
            });
        }

        limbs
            .chunks(self.limb_count())
            .map(|row| self.decode(row))
            .collect()
    }

    /// Parallel variant of [`LimbCodec::decode_batch`] with identical output
    pub fn decode_batch_par(&self, limbs: &[BigUint]) -> Result<Vec<BigUint>> {
        if limbs.len() % self.limb_count() != 0 {
            return Err(CodecError::RaggedBuffer {
                limb_count: self.limb_count(),
                got: limbs.len(),
            });
        }

        limbs
            .par_chunks(self.limb_count())
            .map(|row| self.decode(row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    fn decimal_codec() -> LimbCodec {
        LimbCodec::new(big(10), big(1000)).unwrap()
    }

    #[test]
    fn test_batch_roundtrip_preserves_order() {
        let codec = decimal_codec();
        let values: Vec<BigInt> = [359u32, 0, 7, 999, 100]
            .iter()
            .map(|&v| BigInt::from(v))
            .collect();

        let limbs = codec.encode_batch(&values).unwrap();
        assert_eq!(limbs.len(), values.len() * 3);

        let decoded = codec.decode_batch(&limbs).unwrap();
        let expected: Vec<BigUint> = [359u32, 0, 7, 999, 100]
            .iter()
            .map(|&v| big(v as u128))
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_batch_limb_layout() {
        let codec = decimal_codec();
        let limbs = codec
            .encode_batch(&[BigInt::from(359), BigInt::from(42)])
            .unwrap();
        assert_eq!(
            limbs,
            vec![big(9), big(5), big(3), big(2), big(4), big(0)]
        );
    }

    #[test]
    fn test_empty_batch() {
        let codec = decimal_codec();
        assert!(codec.encode_batch(&[]).unwrap().is_empty());
        assert!(codec.decode_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_batch_fails_whole_on_bad_element() {
        let codec = decimal_codec();
        let values = vec![BigInt::from(1), BigInt::from(-1), BigInt::from(2)];
        assert!(matches!(
            codec.encode_batch(&values),
            Err(CodecError::NegativeValue { .. })
        ));
        assert!(matches!(
            codec.encode_batch_par(&values),
            Err(CodecError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_decode_batch_ragged_buffer() {
        let codec = decimal_codec();
        let limbs = vec![big(1), big(2), big(3), big(4)];
        assert!(matches!(
            codec.decode_batch(&limbs),
            Err(CodecError::RaggedBuffer {
                limb_count: 3,
                got: 4
            })
        ));
        assert!(matches!(
            codec.decode_batch_par(&limbs),
            Err(CodecError::RaggedBuffer {
                limb_count: 3,
                got: 4
            })
        ));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let codec = LimbCodec::with_defaults();
        let values: Vec<BigInt> = (0u32..64)
            .map(|i| BigInt::from(BigUint::one() << i) * BigInt::from(i + 1))
            .collect();

        let serial = codec.encode_batch(&values).unwrap();
        let parallel = codec.encode_batch_par(&values).unwrap();
        assert_eq!(serial, parallel);

        let decoded_serial = codec.decode_batch(&serial).unwrap();
        let decoded_parallel = codec.decode_batch_par(&parallel).unwrap();
        assert_eq!(decoded_serial, decoded_parallel);
    }
}
