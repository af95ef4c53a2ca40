use crate::error::Result;
use crate::network::gradients::Gradients;
use crate::network::parameters::Parameters;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies `param -= learning_rate * gradient` to every weight and bias.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) -> Result<()> {
        params.apply_gradients(grads, self.learning_rate)
    }
}
