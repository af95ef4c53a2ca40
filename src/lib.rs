pub mod activation;
pub mod data;
pub mod error;
pub mod logging;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod pipeline;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use data::{load_directory, normalize, parse_dataset, window, Dataset, Sample, Segment};
pub use error::{Error, Result};
pub use loss::loss;
pub use math::matrix::Matrix;
pub use math::vector::dot;
pub use network::{backward, forward, Gradients, Init, Parameters};
pub use optim::sgd::Sgd;
pub use train::{evaluate, train, train_with_config, TrainConfig};
