/// Square convolution kernel with signed real-valued weights
///
/// Weights are stored row-major in a contiguous buffer. A kernel is
/// read-only once built; filtering never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
    side: usize,
}

impl Kernel {
    /// Create a kernel from a row-major weight buffer
    ///
    /// # Arguments
    /// * `side` - Side length of the square kernel, at least 1
    /// * `weights` - Exactly `side * side` weights, row-major
    ///
    /// # Panics
    /// Panics if `side` is zero or `weights` does not hold exactly
    /// `side * side` values.
    pub fn new(side: usize, weights: Vec<f32>) -> Self {
        assert!(side >= 1, "Kernel side must be at least 1");
        assert_eq!(
            weights.len(),
            side * side,
            "Kernel must be square: expected {} weights for side {}, got {}",
            side * side,
            side,
            weights.len()
        );
        Self { weights, side }
    }

    /// Create a kernel from a slice of equal-length rows
    ///
    /// # Arguments
    /// * `rows` - Kernel rows, each exactly as long as the number of rows
    ///
    /// # Panics
    /// Panics if `rows` is empty or any row length differs from the row
    /// count.
    ///
    /// # Example
    /// ```
    /// use convolvr::Kernel;
    ///
    /// let sharpen = Kernel::from_rows(&[
    ///     [ 0.0, -1.0,  0.0],
    ///     [-1.0,  5.0, -1.0],
    ///     [ 0.0, -1.0,  0.0],
    /// ]);
    /// assert_eq!(sharpen.side(), 3);
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Self {
        let side = rows.len();
        assert!(side >= 1, "Kernel must have at least one row");

        let mut weights = Vec::with_capacity(side * side);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                side,
                "Kernel must be square: got a row of {} weights in a kernel of {} rows",
                row.len(),
                side
            );
            weights.extend_from_slice(row);
        }

        Self { weights, side }
    }

    /// Side length of the kernel
    pub fn side(&self) -> usize {
        self.side
    }

    /// Width of the zero border the kernel needs around an image
    pub fn padding(&self) -> usize {
        self.side / 2
    }

    /// Weight at the given kernel row and column
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the kernel.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.side && col < self.side,
            "Kernel index ({}, {}) out of bounds for side {}",
            row,
            col,
            self.side
        );
        self.weights[row * self.side + col]
    }

    /// Return an odd-sided version of this kernel
    ///
    /// An even-sided kernel gets one zero row appended at the bottom and
    /// one zero column appended at the right. The zero weights contribute
    /// nothing to any sum, but the kernel center is not recomputed, so the
    /// window of an even kernel sits half a cell closer to the top-left of
    /// the source neighborhood than a centered odd kernel would. Odd-sided
    /// kernels are returned unchanged.
    pub fn padded_to_odd(&self) -> Kernel {
        if !self.side.is_multiple_of(2) {
            return self.clone();
        }

        let side = self.side + 1;
        let mut weights = vec![0.0; side * side];
        for row in 0..self.side {
            let src = row * self.side;
            let dst = row * side;
            weights[dst..dst + self.side].copy_from_slice(&self.weights[src..src + self.side]);
        }

        Kernel { weights, side }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_row_major() {
        let k = Kernel::new(2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(k.side(), 2);
        assert_eq!(k.at(0, 0), 1.0);
        assert_eq!(k.at(0, 1), 2.0);
        assert_eq!(k.at(1, 0), 3.0);
        assert_eq!(k.at(1, 1), 4.0);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_new_zero_side() {
        Kernel::new(0, vec![]);
    }

    #[test]
    #[should_panic(expected = "must be square")]
    fn test_new_wrong_weight_count() {
        Kernel::new(2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_rows_matches_new() {
        let a = Kernel::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Kernel::new(2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn test_from_rows_empty() {
        let rows: &[[f32; 1]] = &[];
        Kernel::from_rows(rows);
    }

    #[test]
    #[should_panic(expected = "must be square")]
    fn test_from_rows_ragged() {
        Kernel::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    #[should_panic(expected = "must be square")]
    fn test_from_rows_rectangular() {
        Kernel::from_rows(&[[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_padding_is_half_side() {
        assert_eq!(Kernel::new(1, vec![1.0]).padding(), 0);
        assert_eq!(Kernel::new(3, vec![0.0; 9]).padding(), 1);
        assert_eq!(Kernel::new(5, vec![0.0; 25]).padding(), 2);
    }

    #[test]
    fn test_padded_to_odd_keeps_odd_kernels() {
        let k = Kernel::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(k.padded_to_odd(), k);
    }

    #[test]
    fn test_padded_to_odd_appends_trailing_zeros() {
        let k = Kernel::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).padded_to_odd();
        let expected = Kernel::from_rows(&[
            [1.0, 2.0, 0.0],
            [3.0, 4.0, 0.0],
            [0.0, 0.0, 0.0],
        ]);
        assert_eq!(k, expected);
    }

    #[test]
    fn test_padded_to_odd_padding_is_unchanged() {
        // A side-4 kernel and its side-5 padded form cover the same border width.
        let k = Kernel::new(4, vec![1.0; 16]);
        assert_eq!(k.padding(), k.padded_to_odd().padding());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_at_out_of_bounds() {
        Kernel::new(2, vec![1.0; 4]).at(2, 0);
    }
}
