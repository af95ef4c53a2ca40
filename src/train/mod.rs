pub mod epoch_stats;
pub mod evaluate;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use evaluate::{evaluate, evaluation_loss, predict_batch};
pub use loop_fn::{train_with_config, TrainReport};
pub use train_config::TrainConfig;
pub use trainer::train;
