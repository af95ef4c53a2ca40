use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::dataset::{Dataset, Sample};

/// `n` rows with two features drawn uniformly from `[-1, 1]`, labelled `1`
/// exactly when `feature_1 + feature_2 > 0`.
pub fn linearly_separable(n: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = (0..n)
        .map(|_| {
            let a: f64 = rng.gen_range(-1.0..=1.0);
            let b: f64 = rng.gen_range(-1.0..=1.0);
            let label = if a + b > 0.0 { 1.0 } else { 0.0 };
            Sample::new(vec![a, b], label)
        })
        .collect();
    Dataset::from_checked(samples)
}
