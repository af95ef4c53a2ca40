pub mod csv;
pub mod dataset;
pub mod synthetic;
pub mod window;

pub use csv::{load_directory, parse_dataset, write_csv};
pub use dataset::{normalize, Dataset, Sample};
pub use window::{segments_to_dataset, window, Segment};
