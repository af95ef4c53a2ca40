use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::network::parameters::Init;

/// Hyperparameters for a `train_with_config` run.
///
/// # Fields
/// - `epochs`       : full passes over the training data
/// - `learning_rate`: SGD step size
/// - `batch_size`   : samples per gradient update; `1` for online SGD
/// - `num_hidden`   : width of the hidden ReLU layer
/// - `init`         : parameter initialization scheme
///
/// Missing fields take their defaults when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub batch_size: usize,
    pub num_hidden: usize,
    pub init: Init,
}

impl TrainConfig {
    /// Defaults for everything except epochs and learning rate.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be at least 1".to_owned()));
        }
        if self.num_hidden == 0 {
            return Err(Error::InvalidConfig("num_hidden must be at least 1".to_owned()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 200,
            learning_rate: 0.1,
            batch_size: 1,
            num_hidden: 4,
            init: Init::Constant,
        }
    }
}
