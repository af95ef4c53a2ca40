use crate::error::{Error, Result};

pub struct BceLoss;

/// Outputs are clamped into `[EPS, 1 - EPS]` before taking logarithms.
pub const EPS: f64 = 1e-15;

impl BceLoss {
    /// Scalar BCE: -mean(t·ln(clamp(y)) + (1-t)·ln(1-clamp(y)))
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        if predicted.len() != expected.len() {
            return Err(Error::shape(
                "bce_loss",
                (1, predicted.len()),
                (1, expected.len()),
            ));
        }
        if predicted.is_empty() {
            return Err(Error::EmptyDataset("loss over zero predictions"));
        }
        let n = predicted.len() as f64;
        Ok(predicted
            .iter()
            .zip(expected.iter())
            .map(|(&p, &t)| {
                let y = p.clamp(EPS, 1.0 - EPS);
                -(t * y.ln() + (1.0 - t) * (1.0 - y).ln())
            })
            .sum::<f64>()
            / n)
    }

    /// Gradient of BCE composed with a sigmoid output, taken with respect to
    /// the pre-sigmoid value: `predicted - expected`.
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
