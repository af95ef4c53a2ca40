use crate::error::{Error, Result};

/// Sum of pairwise products of two equal-length vectors.
pub fn dot(u: &[f64], v: &[f64]) -> Result<f64> {
    if u.len() != v.len() {
        return Err(Error::shape("dot", (1, u.len()), (1, v.len())));
    }
    Ok(u.iter().zip(v.iter()).map(|(a, b)| a * b).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_known_vectors() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(dot(&[5.0], &[3.0]).unwrap(), 15.0);
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn dot_rejects_length_mismatch() {
        assert!(matches!(
            dot(&[1.0, 2.0], &[3.0, 4.0, 5.0]),
            Err(Error::Shape { op: "dot", left: (1, 2), right: (1, 3) })
        ));
    }
}
