pub mod bce;

pub use bce::BceLoss;

use crate::error::Result;

/// Mean binary cross-entropy of `outputs` against `targets`.
pub fn loss(outputs: &[f64], targets: &[f64]) -> Result<f64> {
    BceLoss::loss(outputs, targets)
}
