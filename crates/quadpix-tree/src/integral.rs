//! Integral image (summed-area table) for O(1) rectangle sums
//!
//! Region classification needs the cell sum of every region the recursion
//! visits. Summing the sub-rectangle directly at each level costs
//! O(N² log N) over a worst-case build; the summed-area table brings every
//! rectangle sum down to four lookups after one O(N²) pass.

use quadpix_core::BitMatrix;

/// Summed-area table over a [`BitMatrix`].
///
/// `get(x, y)` holds the sum of all cells in `[0, x) × [0, y)`, so the
/// table is one cell wider and taller than the matrix.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    data: Vec<u64>,
    side: u32,
}

impl IntegralImage {
    /// Build the table from a binary matrix.
    pub fn from_matrix(matrix: &BitMatrix) -> Self {
        let n = matrix.side() as usize;
        let stride = n + 1;
        let mut data = vec![0u64; stride * stride];
        for y in 0..n {
            let mut row_sum = 0u64;
            for x in 0..n {
                row_sum += matrix.get_unchecked(x as u32, y as u32) as u64;
                data[(y + 1) * stride + (x + 1)] = data[y * stride + (x + 1)] + row_sum;
            }
        }
        Self {
            data,
            side: matrix.side(),
        }
    }

    /// Side length of the underlying matrix.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Cumulative sum over `[0, x) × [0, y)`.
    ///
    /// Returns `None` if `x` or `y` exceeds the matrix side.
    pub fn get(&self, x: u32, y: u32) -> Option<u64> {
        if x > self.side || y > self.side {
            return None;
        }
        let stride = self.side as usize + 1;
        Some(self.data[y as usize * stride + x as usize])
    }

    /// Sum of cells in the `w × h` rectangle with top-left corner `(x, y)`.
    ///
    /// Returns `None` if the rectangle extends past the matrix.
    pub fn sum_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Option<u64> {
        let x2 = x.checked_add(w)?;
        let y2 = y.checked_add(h)?;
        if x2 > self.side || y2 > self.side {
            return None;
        }
        let stride = self.side as usize + 1;
        let at = |x: u32, y: u32| self.data[y as usize * stride + x as usize];
        Some(at(x2, y2) + at(x, y) - at(x2, y) - at(x, y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_sum(m: &BitMatrix, x: u32, y: u32, w: u32, h: u32) -> u64 {
        let mut sum = 0u64;
        for yy in y..y + h {
            for xx in x..x + w {
                sum += m.get_unchecked(xx, yy) as u64;
            }
        }
        sum
    }

    #[test]
    fn test_full_sum() {
        let m = BitMatrix::from_rows(&[vec![0, 1], vec![1, 1]]).unwrap();
        let ii = IntegralImage::from_matrix(&m);
        assert_eq!(ii.sum_rect(0, 0, 2, 2), Some(3));
        assert_eq!(ii.get(2, 2), Some(3));
        assert_eq!(ii.get(0, 0), Some(0));
    }

    #[test]
    fn test_single_cells() {
        let m = BitMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let ii = IntegralImage::from_matrix(&m);
        assert_eq!(ii.sum_rect(0, 0, 1, 1), Some(0));
        assert_eq!(ii.sum_rect(1, 0, 1, 1), Some(1));
        assert_eq!(ii.sum_rect(0, 1, 1, 1), Some(1));
        assert_eq!(ii.sum_rect(1, 1, 1, 1), Some(0));
    }

    #[test]
    fn test_out_of_bounds() {
        let m = BitMatrix::new(4).unwrap();
        let ii = IntegralImage::from_matrix(&m);
        assert_eq!(ii.sum_rect(0, 0, 5, 1), None);
        assert_eq!(ii.sum_rect(4, 4, 1, 1), None);
        assert_eq!(ii.get(5, 0), None);
    }

    #[test]
    fn test_matches_direct_summation() {
        use rand::RngExt;

        let mut rng = rand::rng();
        let mut m = BitMatrix::new(16).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                m.set(x, y, rng.random_bool(0.5) as u8).unwrap();
            }
        }
        let ii = IntegralImage::from_matrix(&m);
        for (x, y, w, h) in [(0, 0, 16, 16), (3, 5, 7, 2), (15, 15, 1, 1), (0, 8, 16, 8)] {
            assert_eq!(ii.sum_rect(x, y, w, h), Some(direct_sum(&m, x, y, w, h)));
        }
    }
}
