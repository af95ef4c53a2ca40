use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::bce::BceLoss;
use crate::network::parameters::Parameters;
use crate::network::pass::predict;

/// Outputs at or above this are classified positive.
pub const THRESHOLD: f64 = 0.5;

/// Sigmoid output for every sample, in dataset order.
pub fn predict_batch(params: &Parameters, dataset: &Dataset) -> Result<Vec<f64>> {
    dataset
        .iter()
        .map(|s| predict(&s.features, params))
        .collect()
}

/// Fraction of samples whose thresholded prediction equals the label.
///
/// An empty dataset scores `0.0`.
pub fn evaluate(params: &Parameters, dataset: &Dataset) -> Result<f64> {
    let outputs = predict_batch(params, dataset)?;
    Ok(accuracy(&outputs, &dataset.labels()))
}

/// Mean BCE of the network's predictions over `dataset`.
pub fn evaluation_loss(params: &Parameters, dataset: &Dataset) -> Result<f64> {
    let outputs = predict_batch(params, dataset)?;
    BceLoss::loss(&outputs, &dataset.labels())
}

pub(crate) fn accuracy(outputs: &[f64], labels: &[f64]) -> f64 {
    let n = outputs.len();
    if n == 0 {
        return 0.0;
    }
    let correct = outputs
        .iter()
        .zip(labels.iter())
        .filter(|&(&y, &t)| classify(y) == t)
        .count();
    correct as f64 / n as f64
}

fn classify(output: f64) -> f64 {
    if output >= THRESHOLD {
        1.0
    } else {
        0.0
    }
}
