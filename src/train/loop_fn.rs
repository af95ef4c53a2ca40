use std::time::Instant;

use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::{Error, Result};
use crate::loss::bce::BceLoss;
use crate::network::gradients::Gradients;
use crate::network::parameters::Parameters;
use crate::network::pass::{backward, forward};
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::{accuracy, predict_batch};
use crate::train::train_config::TrainConfig;

/// Trained parameters plus one `EpochStats` per completed epoch.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub params: Parameters,
    pub history: Vec<EpochStats>,
}

/// Trains a fresh network on `dataset` for `config.epochs` epochs.
///
/// Samples are visited in input order, `config.batch_size` at a time. Any
/// error aborts the run; there is no partial result.
pub fn train_with_config(dataset: &Dataset, config: &TrainConfig) -> Result<TrainReport> {
    config.validate()?;
    if dataset.is_empty() {
        return Err(Error::EmptyDataset("cannot train on a dataset with no rows"));
    }

    let mut params = Parameters::with_init(dataset.num_features(), config.num_hidden, config.init);
    let optimizer = Sgd::new(config.learning_rate);
    let labels = dataset.labels();
    let mut history = Vec::with_capacity(config.epochs);

    debug!(
        samples = dataset.len(),
        features = dataset.num_features(),
        hidden = config.num_hidden,
        "starting training"
    );

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        run_one_epoch(&mut params, dataset, &optimizer, config.batch_size)?;

        // Reporting only: one pass over the full training set.
        let outputs = predict_batch(&params, dataset)?;
        let train_loss = BceLoss::loss(&outputs, &labels)?;
        let train_accuracy = accuracy(&outputs, &labels);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!(
            epoch,
            total = config.epochs,
            loss = train_loss,
            accuracy = train_accuracy,
            elapsed_ms,
            "epoch complete"
        );

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            train_accuracy,
            elapsed_ms,
        });
    }

    Ok(TrainReport { params, history })
}

/// One pass of mini-batch gradient descent over `dataset`.
fn run_one_epoch(
    params: &mut Parameters,
    dataset: &Dataset,
    optimizer: &Sgd,
    batch_size: usize,
) -> Result<()> {
    for batch in dataset.samples().chunks(batch_size) {
        let mut acc = Gradients::zeros_like(params);

        for sample in batch {
            let (output, hidden) = forward(&sample.features, params)?;
            let grads = backward(&sample.features, &hidden, output, sample.label, params)?;
            acc.accumulate(&grads)?;
        }

        optimizer.step(params, &acc.averaged(batch.len()))?;
    }
    Ok(())
}
