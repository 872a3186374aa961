//! Limb encoding demo
//!
//! Run with: cargo run -p bigshare-harness --bin demo
//!
//! Encodes a batch of large integers with the default codec, shows the limb
//! layout, and reconstructs the originals.

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bigshare_codec::LimbCodec;
use bigshare_harness::verify_batch;
use bigshare_tensor::BigIntTensor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo=info,bigshare_harness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BigShare demo v{}", env!("CARGO_PKG_VERSION"));

    // Small decimal codec, easy to eyeball
    let decimal = LimbCodec::new(BigUint::from(10u32), BigUint::from(1000u32))?;
    tracing::info!(
        "Decimal codec: radix {}, max magnitude {}, {} limbs",
        decimal.radix(),
        decimal.max_magnitude(),
        decimal.limb_count()
    );
    let limbs = decimal.encode(&BigInt::from(359))?;
    tracing::info!("encode(359) = {:?}", limbs);
    tracing::info!("decode back  = {}", decimal.decode(&limbs)?);

    // Default codec: radix 2^63 - 1, values up to 2^128
    let tensor = BigIntTensor::with_defaults();
    tracing::info!(
        "Default tensor {}: {} limbs per value",
        tensor.meta().id,
        tensor.codec().limb_count()
    );

    let values: Vec<BigInt> = (96u32..104)
        .map(|i| BigInt::from(BigUint::one() << i))
        .collect();
    let encoded = tensor.encode(&values, &[2, 4])?;
    tracing::info!("Encoded shape: {:?}", encoded.shape);
    for (i, value) in values.iter().enumerate() {
        tracing::info!("{} -> {:?}", value, encoded.limb_row(i));
    }

    let back = tensor.materialize(&encoded)?;
    tracing::info!("Materialized: {:?}", back);

    // Cross-check against the closed-form reference
    verify_batch(tensor.codec(), &values)?;
    tracing::info!("Reference verification passed for {} values", values.len());

    Ok(())
}
