use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense row-major matrix.
///
/// Every operation takes `&self` and returns a new matrix; nothing mutates
/// its inputs. Fallible operations report both shapes on mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![value; cols]; rows],
        }
    }

    /// Samples every entry uniformly from `[-half_range, half_range]`.
    ///
    /// Takes the RNG by reference so a seeded generator gives reproducible
    /// matrices.
    pub fn random_uniform<R: Rng>(
        rows: usize,
        cols: usize,
        half_range: f64,
        rng: &mut R,
    ) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-half_range..=half_range);
            }
        }
        res
    }

    /// Builds a matrix from rows. An empty `data` gives a 0x0 matrix;
    /// ragged rows are rejected.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map(|r| r.len()).unwrap_or(0);
        if let Some(bad) = data.iter().find(|r| r.len() != cols) {
            return Err(Error::shape("from_data", (1, cols), (1, bad.len())));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// A 1xN matrix holding `values`.
    pub fn row_vector(values: &[f64]) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values.to_vec()],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks that `data` really holds `rows` rows of `cols` entries.
    ///
    /// The fields are public and deserialized as-is, so a matrix read from
    /// disk can declare one shape and carry another.
    pub fn check_layout(&self, op: &'static str) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(Error::shape(op, self.shape(), (self.data.len(), self.cols)));
        }
        if let Some(bad) = self.data.iter().find(|r| r.len() != self.cols) {
            return Err(Error::shape(op, self.shape(), (self.rows, bad.len())));
        }
        Ok(())
    }

    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::shape("matmul", self.shape(), rhs.shape()));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    /// Element-wise (Hadamard) product.
    pub fn elementwise_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("elementwise_mul", rhs, |a, b| a * b)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(Error::shape(op, self.shape(), rhs.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a
                    .iter()
                    .zip(row_b.iter())
                    .map(|(&a, &b)| functor(a, b))
                    .collect()
            })
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: vec![],
        }
    }
}
