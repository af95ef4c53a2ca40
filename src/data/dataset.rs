use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// One labelled row: features plus a 0/1 label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: f64) -> Sample {
        Sample { features, label }
    }
}

/// Ordered samples sharing one feature width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Rejects samples whose feature width differs from the first sample's.
    pub fn new(samples: Vec<Sample>) -> Result<Dataset> {
        if let Some(first) = samples.first() {
            let width = first.features.len();
            if let Some(bad) = samples.iter().find(|s| s.features.len() != width) {
                return Err(Error::shape(
                    "dataset",
                    (1, width),
                    (1, bad.features.len()),
                ));
            }
        }
        Ok(Dataset { samples })
    }

    pub(crate) fn from_checked(samples: Vec<Sample>) -> Dataset {
        Dataset { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Feature width; `0` for an empty dataset.
    pub fn num_features(&self) -> usize {
        self.samples.first().map(|s| s.features.len()).unwrap_or(0)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn labels(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// Splits at `floor(len * ratio)` without reordering: the prefix trains,
    /// the rest is held out.
    pub fn split(&self, ratio: f64) -> Result<(Dataset, Dataset)> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidConfig(format!(
                "split ratio {ratio} is outside [0, 1]"
            )));
        }
        let at = (self.len() as f64 * ratio).floor() as usize;
        let (head, tail) = self.samples.split_at(at);
        Ok((
            Dataset::from_checked(head.to_vec()),
            Dataset::from_checked(tail.to_vec()),
        ))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

struct ColumnStats {
    mean: f64,
    std_dev: f64,
}

/// Z-score normalizes every feature column with population statistics.
///
/// A constant column has no spread and maps to `0.0` everywhere. Labels are
/// copied through.
pub fn normalize(dataset: &Dataset) -> Result<Dataset> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset("cannot normalize a dataset with no rows"));
    }

    let n = dataset.len() as f64;
    let stats: Vec<ColumnStats> = (0..dataset.num_features())
        .map(|j| {
            let column = || dataset.samples.iter().map(move |s| s.features[j]);
            let first = dataset.samples[0].features[j];
            let mean = column().sum::<f64>() / n;
            let variance = column().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            // Summation error can leave a tiny variance on a constant column.
            let std_dev = if column().all(|x| x == first) {
                warn!(column = j, "constant feature column normalized to zero");
                0.0
            } else {
                variance.sqrt()
            };
            ColumnStats { mean, std_dev }
        })
        .collect();

    let samples = dataset
        .samples
        .iter()
        .map(|s| Sample {
            features: s
                .features
                .iter()
                .zip(stats.iter())
                .map(|(&x, st)| {
                    if st.std_dev == 0.0 {
                        0.0
                    } else {
                        (x - st.mean) / st.std_dev
                    }
                })
                .collect(),
            label: s.label,
        })
        .collect();

    Ok(Dataset::from_checked(samples))
}
