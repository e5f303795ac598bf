//! Randomized demo inputs for the cycle walkthrough
//!
//! Reproduces the classroom demo's sampling policy: five nodes with values
//! in [-9, 9], and a cycle on a coin flip with a uniformly chosen entry
//! index. The policy lives here, outside the core - the builder and
//! detector accept arbitrary inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::demo;

/// Values and optional cycle index sampled for one demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoInput {
    pub values: Vec<i64>,
    pub cycle_index: Option<usize>,
}

/// Sample one demo input from the fixed policy
pub fn sample(rng: &mut impl Rng) -> DemoInput {
    let values = (0..demo::NODE_COUNT)
        .map(|_| rng.gen_range(demo::MIN_VALUE..=demo::MAX_VALUE))
        .collect();

    let cycle_index = rng
        .gen_bool(demo::CYCLE_PROBABILITY)
        .then(|| rng.gen_range(0..demo::NODE_COUNT));

    DemoInput {
        values,
        cycle_index,
    }
}

/// RNG for demo sampling: seeded when reproducibility is requested,
/// entropy-backed otherwise
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
