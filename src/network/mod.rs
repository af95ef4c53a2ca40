pub mod gradients;
pub mod parameters;
pub mod pass;

pub use gradients::Gradients;
pub use parameters::{Init, Parameters};
pub use pass::{backward, forward, predict};
