// Runs the full pipeline. The only argument is an optional JSON config path;
// without it, defaults are used and the data is generated.
use std::error::Error;

use ecgnn::logging::init_logging;
use ecgnn::pipeline::{self, PipelineConfig};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::load_json(path)?,
        None => PipelineConfig::default(),
    };

    let report = pipeline::run(&config)?;
    println!("accuracy: {:.4}", report.test_accuracy);
    Ok(())
}
