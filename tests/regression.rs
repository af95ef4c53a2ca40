use ecgnn::data::synthetic::linearly_separable;
use ecgnn::{evaluate, normalize, train, train_with_config, Init, TrainConfig};

#[test]
fn separable_data_reaches_ninety_percent() {
    let data = normalize(&linearly_separable(200, 11)).unwrap();
    let params = train(&data, 200, 0.1).unwrap();
    let accuracy = evaluate(&params, &data).unwrap();
    assert!(accuracy >= 0.9, "accuracy {accuracy}");
}

#[test]
fn seeded_init_also_learns_the_boundary() {
    let data = normalize(&linearly_separable(200, 5)).unwrap();
    let config = TrainConfig {
        init: Init::Seeded { seed: 1 },
        ..TrainConfig::new(200, 0.1)
    };
    let report = train_with_config(&data, &config).unwrap();
    let accuracy = evaluate(&report.params, &data).unwrap();
    assert!(accuracy >= 0.9, "accuracy {accuracy}");
}

#[test]
fn final_epoch_loss_is_below_first() {
    let data = normalize(&linearly_separable(120, 2)).unwrap();
    let report = train_with_config(&data, &TrainConfig::new(30, 0.1)).unwrap();
    let first = report.history.first().unwrap().train_loss;
    let last = report.history.last().unwrap().train_loss;
    assert!(last < first, "loss went from {first} to {last}");
}
