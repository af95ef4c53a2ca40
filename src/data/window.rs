use crate::data::dataset::{Dataset, Sample};
use crate::error::{Error, Result};

/// A run of consecutive dataset rows of one fixed length.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    rows: Vec<Sample>,
}

impl Segment {
    pub fn rows(&self) -> &[Sample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattens the window into one sample.
    ///
    /// Features are the rows' features concatenated in order. The label is
    /// positive when any row in the window is positive.
    pub fn to_sample(&self) -> Sample {
        let features = self
            .rows
            .iter()
            .flat_map(|r| r.features.iter().copied())
            .collect();
        let label = if self.rows.iter().any(|r| r.label == 1.0) {
            1.0
        } else {
            0.0
        };
        Sample::new(features, label)
    }
}

/// Cuts `dataset` into consecutive, non-overlapping windows of exactly
/// `length` rows. A shorter trailing remainder is dropped.
pub fn window(dataset: &Dataset, length: usize) -> Result<Vec<Segment>> {
    if length == 0 {
        return Err(Error::InvalidConfig("window length must be at least 1".to_owned()));
    }
    Ok(dataset
        .samples()
        .chunks_exact(length)
        .map(|rows| Segment {
            rows: rows.to_vec(),
        })
        .collect())
}

/// One flattened sample per segment.
pub fn segments_to_dataset(segments: &[Segment]) -> Dataset {
    Dataset::from_checked(segments.iter().map(Segment::to_sample).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|i| Sample::new(vec![i as f64, 2.0 * i as f64], (i % 2) as f64))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn drops_trailing_partial_window() {
        let segments = window(&numbered(5), 2).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].rows()[0].features, vec![0.0, 0.0]);
        assert_eq!(segments[0].rows()[1].features, vec![1.0, 2.0]);
        assert_eq!(segments[1].rows()[0].features, vec![2.0, 4.0]);
        assert_eq!(segments[1].rows()[1].features, vec![3.0, 6.0]);
    }

    #[test]
    fn window_longer_than_data_is_empty() {
        assert!(window(&numbered(2), 5).unwrap().is_empty());
        assert!(window(&Dataset::default(), 3).unwrap().is_empty());
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(
            window(&numbered(3), 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn flattening_concatenates_and_ors_labels() {
        let segments = window(&numbered(4), 2).unwrap();
        let flat = segments_to_dataset(&segments);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.num_features(), 4);
        assert_eq!(flat.samples()[0].features, vec![0.0, 0.0, 1.0, 2.0]);
        assert_eq!(flat.samples()[0].label, 1.0);

        let negatives = Dataset::new(vec![
            Sample::new(vec![1.0], 0.0),
            Sample::new(vec![2.0], 0.0),
        ])
        .unwrap();
        let flat = segments_to_dataset(&window(&negatives, 2).unwrap());
        assert_eq!(flat.samples()[0].label, 0.0);
    }

    proptest! {
        #[test]
        fn windows_are_full_and_cover_all_but_remainder(n in 0usize..60, length in 1usize..12) {
            let ds = numbered(n);
            let segments = window(&ds, length).unwrap();
            let covered: usize = segments.iter().map(Segment::len).sum();
            prop_assert!(segments.iter().all(|s| s.len() == length));
            prop_assert!(covered <= ds.len());
            prop_assert!(ds.len() - covered < length);
        }
    }
}
