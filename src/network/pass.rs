use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::loss::bce::BceLoss;
use crate::math::matrix::Matrix;
use crate::network::gradients::Gradients;
use crate::network::parameters::Parameters;

const HIDDEN: ActivationFunction = ActivationFunction::ReLU;
const OUTPUT: ActivationFunction = ActivationFunction::Sigmoid;

/// Runs one sample through the network.
///
/// Returns the sigmoid output and the `[1 x H]` ReLU activation of the
/// hidden layer, which `backward` needs.
pub fn forward(input: &[f64], params: &Parameters) -> Result<(f64, Matrix)> {
    if params.weights_hidden_out.cols != 1 {
        return Err(Error::shape(
            "forward",
            (params.num_hidden(), 1),
            params.weights_hidden_out.shape(),
        ));
    }
    let x = Matrix::row_vector(input);
    let hidden_raw = x
        .matmul(&params.weights_in_hidden)?
        .add(&params.bias_hidden)?;
    let hidden = hidden_raw.map(|z| HIDDEN.function(z));

    let output_raw = hidden.matmul(&params.weights_hidden_out)?.data[0][0] + params.bias_output;
    Ok((OUTPUT.function(output_raw), hidden))
}

/// Gradients of the per-sample BCE loss for one sample.
pub fn backward(
    input: &[f64],
    hidden_activation: &Matrix,
    output: f64,
    target: f64,
    params: &Parameters,
) -> Result<Gradients> {
    // dL/d(output_raw) for sigmoid + BCE
    let delta = Matrix::filled(1, 1, BceLoss::derivative(output, target));

    let weights_hidden_out = hidden_activation.transpose().matmul(&delta)?;

    let relu_grad = hidden_activation.map(|h| HIDDEN.derivative(h));
    let hidden_error = delta
        .matmul(&params.weights_hidden_out.transpose())?
        .elementwise_mul(&relu_grad)?;

    let weights_in_hidden = Matrix::row_vector(input)
        .transpose()
        .matmul(&hidden_error)?;

    Ok(Gradients {
        weights_in_hidden,
        bias_hidden: hidden_error,
        weights_hidden_out,
        bias_output: delta.data[0][0],
    })
}

pub fn predict(input: &[f64], params: &Parameters) -> Result<f64> {
    forward(input, params).map(|(output, _)| output)
}
