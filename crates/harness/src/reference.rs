//! Closed-form reference codec
//!
//! Computes limb `i` as `(value mod radix^(i+1)) div radix^i`, the textbook
//! digit-extraction formula, independently of the production codec's div-rem
//! loop. Slow but obviously correct, so the two can cross-check each other.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Extract `limb_count` little-endian base-`radix` digits of `value`
pub fn reference_encode(radix: &BigUint, limb_count: usize, value: &BigUint) -> Vec<BigUint> {
    let mut limbs = Vec::with_capacity(limb_count);
    let mut low = BigUint::one();
    for _ in 0..limb_count {
        let high = &low * radix;
        limbs.push((value % &high) / &low);
        low = high;
    }
    limbs
}

/// Evaluate `sum_i radix^i * limbs[i]`
pub fn reference_decode(radix: &BigUint, limbs: &[BigUint]) -> BigUint {
    let mut value = BigUint::zero();
    let mut weight = BigUint::one();
    for limb in limbs {
        value += &weight * limb;
        weight *= radix;
    }
    value
}
