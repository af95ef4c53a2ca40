use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::network::parameters::Parameters;
use crate::train::loop_fn::train_with_config;
use crate::train::train_config::TrainConfig;

/// Trains with default width, online updates and constant initialization.
pub fn train(dataset: &Dataset, epochs: usize, learning_rate: f64) -> Result<Parameters> {
    train_with_config(dataset, &TrainConfig::new(epochs, learning_rate)).map(|r| r.params)
}
