// src/graph/rank/matrix.rs
//! Row-major square matrix of `f64`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{LinkRankError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DenseMatrix {
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.size + j] = value;
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.cells[i * self.size..(i + 1) * self.size]
    }

    /// One line per row, cells separated by two spaces.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for i in 0..self.size {
            let line: Vec<String> = self.row(i).iter().map(f64::to_string).collect();
            let _ = writeln!(out, "{}", line.join("  "));
        }
        out
    }

    /// Writes [`DenseMatrix::render`] output to `path`.
    ///
    /// # Errors
    /// Returns error if the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| LinkRankError::io(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut m = DenseMatrix::zeros(2);
        m.set(0, 1, 1.0);
        m.set(1, 0, 0.5);
        assert_eq!(m.row(0), &[0.0, 1.0]);
        assert_eq!(m.row(1), &[0.5, 0.0]);
        assert!((m.at(1, 0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_two_space_separated() {
        let mut m = DenseMatrix::zeros(2);
        m.set(0, 0, 1.0);
        assert_eq!(m.render(), "1  0\n0  0\n");
    }
}
