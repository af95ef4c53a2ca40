use std::fs;
use std::path::PathBuf;

use ecgnn::data::synthetic::linearly_separable;
use ecgnn::data::write_csv;
use ecgnn::pipeline::{run, PipelineConfig};
use ecgnn::{load_directory, parse_dataset, Error, Parameters, TrainConfig};

/// Fresh per-test directory under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ecgnn-{name}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn directory_files_load_in_name_order() {
    let dir = scratch("order");
    fs::write(dir.join("b.csv"), "label,x,y\n0,4,8\n1,5,10\n").unwrap();
    fs::write(dir.join("a.csv"), "label,x,y\n1,1,2\n\n0,2,4\n").unwrap();
    fs::write(dir.join("notes.txt"), "not,a,dataset\n").unwrap();
    fs::create_dir(dir.join("nested.csv")).unwrap();

    let ds = load_directory(&dir).unwrap();
    let firsts: Vec<f64> = ds.iter().map(|s| s.features[0]).collect();
    assert_eq!(firsts, vec![1.0, 2.0, 4.0, 5.0]);
    assert_eq!(ds.labels(), vec![1.0, 0.0, 0.0, 1.0]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_directory_gives_empty_dataset() {
    let dir = scratch("empty");
    assert!(load_directory(&dir).unwrap().is_empty());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn parse_error_names_the_offending_file() {
    let dir = scratch("bad");
    fs::write(dir.join("a.csv"), "label,x\n1,1\n").unwrap();
    fs::write(dir.join("b.csv"), "label,x\n1,1\n0,oops\n").unwrap();

    match load_directory(&dir) {
        Err(Error::Parse { path, line, .. }) => {
            assert_eq!(path.file_name().unwrap(), "b.csv");
            assert_eq!(line, 3);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn files_with_different_widths_are_rejected() {
    let dir = scratch("widths");
    fs::write(dir.join("a.csv"), "label,x,y\n1,1,2\n").unwrap();
    fs::write(dir.join("b.csv"), "label,x\n1,1\n").unwrap();
    assert!(matches!(
        load_directory(&dir),
        Err(Error::Parse { line: 0, .. })
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = scratch("missing");
    assert!(matches!(
        parse_dataset(dir.join("nope.csv")),
        Err(Error::Io { .. })
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn written_csv_reads_back() {
    let dir = scratch("write");
    let ds = linearly_separable(25, 4);
    write_csv(&ds, dir.join("gen.csv")).unwrap();
    assert_eq!(parse_dataset(dir.join("gen.csv")).unwrap(), ds);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn parameters_survive_json_persistence() {
    let dir = scratch("params");
    let params = Parameters::seeded(3, 5, 21);
    let path = dir.join("model.json");
    params.save_json(&path).unwrap();
    assert_eq!(Parameters::load_json(&path).unwrap(), params);

    fs::write(&path, "{\"weights_in_hidden\": 3}").unwrap();
    assert!(matches!(Parameters::load_json(&path), Err(Error::Json(_))));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn model_file_with_ragged_matrix_is_rejected() {
    let dir = scratch("ragged-model");
    let path = dir.join("model.json");
    fs::write(
        &path,
        r#"{
  "weights_in_hidden": {"rows": 2, "cols": 2, "data": [[0.1, 0.2], [0.3]]},
  "bias_hidden": {"rows": 1, "cols": 2, "data": [[0.0, 0.0]]},
  "weights_hidden_out": {"rows": 2, "cols": 1, "data": [[0.5], [0.5]]},
  "bias_output": 0.0
}"#,
    )
    .unwrap();
    assert!(matches!(
        Parameters::load_json(&path),
        Err(Error::Shape { op: "weights_in_hidden", .. })
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn non_utf8_file_is_a_parse_error() {
    let dir = scratch("non-utf8");
    let path = dir.join("bad.csv");
    fs::write(&path, [b'l', b'\n', 0xff, 0xfe, b',', b'1', b'\n']).unwrap();
    match parse_dataset(&path) {
        Err(Error::Parse { path: p, line, .. }) => {
            assert_eq!(p, path);
            assert_eq!(line, 0);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn pipeline_runs_on_a_directory_with_windows() {
    let dir = scratch("pipeline");
    write_csv(&linearly_separable(120, 8), dir.join("part1.csv")).unwrap();
    write_csv(&linearly_separable(80, 9), dir.join("part2.csv")).unwrap();
    let model = dir.join("model.json");

    let config = PipelineConfig {
        data_dir: Some(dir.clone()),
        window_length: Some(3),
        model_out: Some(model.clone()),
        train: TrainConfig::new(3, 0.1),
        ..PipelineConfig::default()
    };
    let report = run(&config).unwrap();

    // 200 rows -> 66 windows -> 52 / 14
    assert_eq!(report.train_samples, 52);
    assert_eq!(report.test_samples, 14);
    assert_eq!(report.params.num_features(), 6);
    assert!((0.0..=1.0).contains(&report.test_accuracy));
    assert_eq!(Parameters::load_json(&model).unwrap(), report.params);

    fs::remove_dir_all(&dir).unwrap();
}
