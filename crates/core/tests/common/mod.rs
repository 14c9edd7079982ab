//! Shared test setup: routes `tracing` output through the test harness.
//!
//! Set `RUST_LOG=device_vec3_core=trace` to see legacy-guard events.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use device_vec3_core::Vec3;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random vector with components in `[-range, range)`.
pub fn random_vec3(rng: &mut StdRng, range: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}
