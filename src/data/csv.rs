//! CSV ingestion.
//!
//! Format: one header line, then rows of `label, feature_1, feature_2, ...`.
//! The label is always the first column and must be `0` or `1`. Blank lines
//! are skipped; any other malformed row fails with the file and 1-based line.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::data::dataset::{Dataset, Sample};
use crate::error::{Error, Result};

const EXTENSION: &str = "csv";

/// Reads one CSV file.
pub fn parse_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => Error::Parse {
            path: path.to_path_buf(),
            line: 0,
            message: "file is not valid UTF-8".to_owned(),
        },
        _ => Error::io(path, e),
    })?;
    let dataset = parse_text(&text, path)?;
    debug!(path = %path.display(), rows = dataset.len(), "parsed csv file");
    Ok(dataset)
}

/// Concatenates every `.csv` file in `dir`, in lexicographic file-name order.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<Dataset> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && has_csv_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        warn!(dir = %dir.display(), "no csv files found");
    }

    let mut samples: Vec<Sample> = Vec::new();
    let mut width: Option<usize> = None;
    for path in &paths {
        let dataset = parse_dataset(path)?;
        if dataset.is_empty() {
            continue;
        }
        match width {
            None => width = Some(dataset.num_features()),
            Some(w) if w != dataset.num_features() => {
                return Err(Error::Parse {
                    path: path.clone(),
                    line: 0,
                    message: format!(
                        "file has {} features, earlier files have {w}",
                        dataset.num_features()
                    ),
                });
            }
            Some(_) => {}
        }
        samples.extend(dataset.into_samples());
    }

    debug!(dir = %dir.display(), files = paths.len(), rows = samples.len(), "loaded directory");
    Ok(Dataset::from_checked(samples))
}

/// Writes `dataset` in the format `parse_dataset` reads.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_rows(dataset, &mut out).map_err(|e| Error::io(path, e))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(EXTENSION))
        .unwrap_or(false)
}

fn write_rows(dataset: &Dataset, out: &mut impl Write) -> io::Result<()> {
    write!(out, "label")?;
    for j in 1..=dataset.num_features() {
        write!(out, ",feature_{j}")?;
    }
    writeln!(out)?;
    for sample in dataset {
        write!(out, "{}", sample.label)?;
        for x in &sample.features {
            write!(out, ",{x}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn parse_text(text: &str, path: &Path) -> Result<Dataset> {
    let mut samples = Vec::new();
    let mut width: Option<usize> = None;

    // Line 1 is the header.
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parse_err = |message: String| Error::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message,
        };

        let values = line
            .split(',')
            .map(|cell| {
                let cell = cell.trim();
                match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    Ok(_) => Err(parse_err(format!("'{cell}' is not a finite number"))),
                    Err(_) => Err(parse_err(format!("'{cell}' is not a valid number"))),
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() < 2 {
            return Err(parse_err(
                "expected a label and at least one feature".to_owned(),
            ));
        }
        match width {
            None => width = Some(values.len()),
            Some(w) if w != values.len() => {
                return Err(parse_err(format!(
                    "row has {} columns, expected {w}",
                    values.len()
                )));
            }
            Some(_) => {}
        }

        let label = values[0];
        if label != 0.0 && label != 1.0 {
            return Err(parse_err(format!("label {label} is not 0 or 1")));
        }
        samples.push(Sample::new(values[1..].to_vec(), label));
    }

    Ok(Dataset::from_checked(samples))
}
