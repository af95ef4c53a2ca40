use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::gradients::Gradients;

/// Value every weight and bias starts at under `Init::Constant`.
pub const INIT_VALUE: f64 = 0.01;

/// Half-width of the uniform range used by `Init::Seeded`.
const SEEDED_HALF_RANGE: f64 = 0.5;

/// How the parameters are filled before the first training step.
///
/// `Constant` leaves every hidden unit identical, and they stay identical for
/// the whole run. `Seeded` breaks that symmetry while staying reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Init {
    #[default]
    Constant,
    Seeded { seed: u64 },
}

/// Weights and biases of the `features -> hidden -> 1` network.
///
/// Shapes: `weights_in_hidden` is `[F x H]`, `bias_hidden` is `[1 x H]`,
/// `weights_hidden_out` is `[H x 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub weights_in_hidden: Matrix,
    pub bias_hidden: Matrix,
    pub weights_hidden_out: Matrix,
    pub bias_output: f64,
}

impl Parameters {
    /// Every weight and bias set to `INIT_VALUE`.
    pub fn initialize(num_features: usize, num_hidden: usize) -> Parameters {
        Parameters {
            weights_in_hidden: Matrix::filled(num_features, num_hidden, INIT_VALUE),
            bias_hidden: Matrix::filled(1, num_hidden, INIT_VALUE),
            weights_hidden_out: Matrix::filled(num_hidden, 1, INIT_VALUE),
            bias_output: INIT_VALUE,
        }
    }

    /// Uniform random weights from a seeded RNG; biases start at `INIT_VALUE`.
    pub fn seeded(num_features: usize, num_hidden: usize, seed: u64) -> Parameters {
        let mut rng = StdRng::seed_from_u64(seed);
        Parameters {
            weights_in_hidden: Matrix::random_uniform(
                num_features,
                num_hidden,
                SEEDED_HALF_RANGE,
                &mut rng,
            ),
            bias_hidden: Matrix::filled(1, num_hidden, INIT_VALUE),
            weights_hidden_out: Matrix::random_uniform(num_hidden, 1, SEEDED_HALF_RANGE, &mut rng),
            bias_output: INIT_VALUE,
        }
    }

    pub fn with_init(num_features: usize, num_hidden: usize, init: Init) -> Parameters {
        match init {
            Init::Constant => Parameters::initialize(num_features, num_hidden),
            Init::Seeded { seed } => Parameters::seeded(num_features, num_hidden, seed),
        }
    }

    pub fn num_features(&self) -> usize {
        self.weights_in_hidden.rows
    }

    pub fn num_hidden(&self) -> usize {
        self.weights_in_hidden.cols
    }

    /// Checks each matrix matches its declared shape and the four fields
    /// agree with each other.
    pub fn check_shapes(&self) -> Result<()> {
        self.weights_in_hidden.check_layout("weights_in_hidden")?;
        self.bias_hidden.check_layout("bias_hidden")?;
        self.weights_hidden_out.check_layout("weights_hidden_out")?;

        let h = self.num_hidden();
        if self.bias_hidden.shape() != (1, h) {
            return Err(Error::shape(
                "bias_hidden",
                (1, h),
                self.bias_hidden.shape(),
            ));
        }
        if self.weights_hidden_out.shape() != (h, 1) {
            return Err(Error::shape(
                "weights_hidden_out",
                (h, 1),
                self.weights_hidden_out.shape(),
            ));
        }
        Ok(())
    }

    /// Applies pre-computed gradients scaled by `lr`.
    pub fn apply_gradients(&mut self, grads: &Gradients, lr: f64) -> Result<()> {
        self.weights_in_hidden = self
            .weights_in_hidden
            .add(&grads.weights_in_hidden.scale(-lr))?;
        self.bias_hidden = self.bias_hidden.add(&grads.bias_hidden.scale(-lr))?;
        self.weights_hidden_out = self
            .weights_hidden_out
            .add(&grads.weights_hidden_out.scale(-lr))?;
        self.bias_output -= lr * grads.bias_output;
        Ok(())
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes parameters previously written by `save_json`.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Parameters> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);
        let params: Parameters = serde_json::from_reader(reader)?;
        params.check_shapes()?;
        Ok(params)
    }
}
