//! The immutable character grid scanned by the workers

use crate::error::{Error, Result};
use crate::grid::random::fill_cells;
use std::fmt;

/// A `rows x cols` grid of lowercase ASCII letters stored row-major.
///
/// The grid has no mutating methods, so once built it can be shared by
/// reference between any number of scanning threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Generate a random grid.
    ///
    /// With `Some(seed)` the same dimensions and seed always produce the same
    /// grid, cell for cell. With `None` the cells come from OS entropy.
    ///
    /// # Errors
    /// `Error::InvalidDimension` if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        let count = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: fill_cells(count, seed),
        })
    }

    /// Build a grid from literal rows, e.g. `["aba", "xyz"]`.
    ///
    /// All rows must be the same non-zero width and contain only `a..=z`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let count = Self::cell_count(rows.len(), cols)?;

        let mut cells = Vec::with_capacity(count);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::InvalidDimension {
                    rows: rows.len(),
                    cols: row.len(),
                });
            }
            for (c, ch) in row.chars().enumerate() {
                if !ch.is_ascii_lowercase() {
                    return Err(Error::InvalidCell {
                        row: r,
                        col: c,
                        value: ch,
                    });
                }
                cells.push(ch as u8);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(Error::InvalidDimension { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at row `r`, column `c`.
    ///
    /// # Panics
    /// If `r >= rows` or `c >= cols`. Scanners bound-check runs before
    /// reading, so hitting this is a bug in the caller.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        assert!(
            r < self.rows && c < self.cols,
            "cell ({r}, {c}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[r * self.cols + c]
    }

    /// All cells of row `r`.
    ///
    /// # Panics
    /// If `r >= rows`.
    pub fn row(&self, r: usize) -> &[u8] {
        assert!(
            r < self.rows,
            "row {r} out of range for grid with {} rows",
            self.rows
        );
        let start = r * self.cols;
        &self.cells[start..start + self.cols]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for &cell in self.row(r) {
                write!(f, "{}", cell as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
