//! Dense distance matrix.

use crate::error::AcoError;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling from site `i` to site `j`.
/// Pairs with no route are marked with [`DistanceMatrix::UNREACHABLE`]
/// (positive infinity). The matrix is not required to be symmetric.
///
/// # Examples
///
/// ```
/// use u_antcolony::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 9.0],
///     vec![5.0, 0.0, 4.0],
///     vec![9.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(1, 2) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Sentinel for a pair of sites that cannot be travelled between.
    pub const UNREACHABLE: f64 = f64::INFINITY;

    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AcoError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(AcoError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from a flat row-major grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, AcoError> {
        if data.len() != size * size {
            return Err(AcoError::SizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from site `from` to site `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from site `from` to site `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Sets both directions of a pair at once.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Number of sites in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two unreachable entries are considered equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Largest finite entry, or `None` if the matrix has none above zero.
    pub fn max_finite(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|d| d.is_finite() && *d > 0.0)
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Number of off-diagonal pairs marked unreachable.
    pub fn unreachable_count(&self) -> usize {
        self.data.iter().filter(|d| d.is_infinite()).count()
    }

    /// Checks the supplier contract: at least one site, and every entry
    /// either a non-negative number or the unreachable sentinel.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.size == 0 {
            return Err(AcoError::EmptyMatrix);
        }
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if value.is_nan() || value < 0.0 {
                    return Err(AcoError::InvalidDistance { from, to, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0, 0.0]]).expect("square");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(0, 1), 3.0);
        assert_eq!(dm.get(1, 0), 4.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            AcoError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
        assert!(DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_negative() {
        assert_eq!(DistanceMatrix::new(0).validate(), Err(AcoError::EmptyMatrix));

        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 0, -2.0);
        assert!(matches!(
            dm.validate(),
            Err(AcoError::InvalidDistance { from: 1, to: 0, .. })
        ));

        dm.set(1, 0, f64::NAN);
        assert!(dm.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_unreachable() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_symmetric(0, 1, DistanceMatrix::UNREACHABLE);
        dm.set_symmetric(1, 2, 7.0);
        assert!(dm.validate().is_ok());
        assert_eq!(dm.unreachable_count(), 2);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_max_finite() {
        let mut dm = DistanceMatrix::new(3);
        assert_eq!(dm.max_finite(), None);
        dm.set_symmetric(0, 1, 12.5);
        dm.set_symmetric(0, 2, DistanceMatrix::UNREACHABLE);
        dm.set_symmetric(1, 2, 3.0);
        assert_eq!(dm.max_finite(), Some(12.5));
    }
}
