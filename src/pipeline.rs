use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::csv::load_directory;
use crate::data::dataset::{normalize, Dataset};
use crate::data::synthetic::linearly_separable;
use crate::data::window::{segments_to_dataset, window};
use crate::error::{Error, Result};
use crate::network::parameters::Parameters;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::{evaluate, evaluation_loss};
use crate::train::loop_fn::train_with_config;
use crate::train::train_config::TrainConfig;

/// End-to-end run settings, usually read from a JSON file.
///
/// Without `data_dir`, `synthetic_rows` linearly separable rows are
/// generated from `seed` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_dir: Option<PathBuf>,
    /// Train on flattened windows of this many rows instead of single rows.
    pub window_length: Option<usize>,
    /// Leading fraction of the samples used for training.
    pub train_ratio: f64,
    pub synthetic_rows: usize,
    pub seed: u64,
    /// Where to write the trained parameters as JSON.
    pub model_out: Option<PathBuf>,
    pub train: TrainConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            data_dir: None,
            window_length: None,
            train_ratio: 0.8,
            synthetic_rows: 200,
            seed: 7,
            model_out: None,
            train: TrainConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<PipelineConfig> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let config: PipelineConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(Error::InvalidConfig(format!(
                "train_ratio {} is outside [0, 1]",
                self.train_ratio
            )));
        }
        if self.window_length == Some(0) {
            return Err(Error::InvalidConfig("window_length must be at least 1".to_owned()));
        }
        self.train.validate()
    }
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub params: Parameters,
    pub history: Vec<EpochStats>,
    pub train_samples: usize,
    pub test_samples: usize,
    /// `0.0` when the held-out set is empty.
    pub test_accuracy: f64,
    /// `None` when the held-out set is empty.
    pub test_loss: Option<f64>,
}

/// Load, normalize, optionally window, split, train, evaluate.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;

    let raw = match &config.data_dir {
        Some(dir) => load_directory(dir)?,
        None => {
            info!(rows = config.synthetic_rows, "no data_dir configured, generating synthetic rows");
            linearly_separable(config.synthetic_rows, config.seed)
        }
    };
    info!(rows = raw.len(), features = raw.num_features(), "dataset loaded");

    let normalized = normalize(&raw)?;
    let samples: Dataset = match config.window_length {
        Some(length) => {
            let segments = window(&normalized, length)?;
            info!(segments = segments.len(), length, "dataset windowed");
            segments_to_dataset(&segments)
        }
        None => normalized,
    };

    let (train_set, test_set) = samples.split(config.train_ratio)?;
    info!(train = train_set.len(), test = test_set.len(), "dataset split");

    let report = train_with_config(&train_set, &config.train)?;

    let test_accuracy = evaluate(&report.params, &test_set)?;
    let test_loss = if test_set.is_empty() {
        None
    } else {
        Some(evaluation_loss(&report.params, &test_set)?)
    };
    info!(accuracy = test_accuracy, loss = ?test_loss, "held-out evaluation");

    if let Some(path) = &config.model_out {
        report.params.save_json(path)?;
        info!(path = %path.display(), "parameters saved");
    }

    Ok(PipelineReport {
        params: report.params,
        history: report.history,
        train_samples: train_set.len(),
        test_samples: test_set.len(),
        test_accuracy,
        test_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_uses_defaults_for_missing_fields() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"window_length": 3, "train": {"epochs": 10}}"#).unwrap();
        assert_eq!(cfg.window_length, Some(3));
        assert_eq!(cfg.train_ratio, 0.8);
        assert_eq!(cfg.train.epochs, 10);
        assert_eq!(cfg.train.learning_rate, 0.1);
    }

    #[test]
    fn validate_rejects_bad_ratio_and_window() {
        let cfg = PipelineConfig {
            train_ratio: 1.2,
            ..PipelineConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = PipelineConfig {
            window_length: Some(0),
            ..PipelineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn synthetic_run_splits_eighty_twenty() {
        let cfg = PipelineConfig {
            train: TrainConfig::new(5, 0.1),
            ..PipelineConfig::default()
        };
        let report = run(&cfg).unwrap();
        assert_eq!(report.train_samples, 160);
        assert_eq!(report.test_samples, 40);
        assert_eq!(report.history.len(), 5);
        assert!(report.test_loss.is_some());
    }
}
