use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;

/// Per-parameter gradients; same shapes as `Parameters`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weights_in_hidden: Matrix,
    pub bias_hidden: Matrix,
    pub weights_hidden_out: Matrix,
    pub bias_output: f64,
}

impl Gradients {
    /// Zero-filled accumulator matching `params`.
    pub fn zeros_like(params: &Parameters) -> Gradients {
        Gradients {
            weights_in_hidden: Matrix::zeros(
                params.weights_in_hidden.rows,
                params.weights_in_hidden.cols,
            ),
            bias_hidden: Matrix::zeros(params.bias_hidden.rows, params.bias_hidden.cols),
            weights_hidden_out: Matrix::zeros(
                params.weights_hidden_out.rows,
                params.weights_hidden_out.cols,
            ),
            bias_output: 0.0,
        }
    }

    /// Adds `other` into this accumulator.
    pub fn accumulate(&mut self, other: &Gradients) -> Result<()> {
        self.weights_in_hidden = self.weights_in_hidden.add(&other.weights_in_hidden)?;
        self.bias_hidden = self.bias_hidden.add(&other.bias_hidden)?;
        self.weights_hidden_out = self.weights_hidden_out.add(&other.weights_hidden_out)?;
        self.bias_output += other.bias_output;
        Ok(())
    }

    /// Divides every entry by `batch_size`. A zero batch size returns the
    /// accumulator unchanged.
    pub fn averaged(&self, batch_size: usize) -> Gradients {
        if batch_size == 0 {
            return self.clone();
        }
        self.scaled(1.0 / batch_size as f64)
    }

    pub fn scaled(&self, factor: f64) -> Gradients {
        Gradients {
            weights_in_hidden: self.weights_in_hidden.scale(factor),
            bias_hidden: self.bias_hidden.scale(factor),
            weights_hidden_out: self.weights_hidden_out.scale(factor),
            bias_output: self.bias_output * factor,
        }
    }
}
