//! Sign and shape helpers shared by the primal and dual formulations.

/// Flip every entry: turns `a · x >= b` into `(-a) · x <= (-b)`.
pub fn negate(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| -v).collect()
}

pub fn negate_rows(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    matrix.iter().map(|row| negate(row)).collect()
}

/// Exact transpose of a rectangular `rows x cols` matrix.
///
/// Row `i` of the input becomes column `i` of the output. The column count is
/// passed explicitly so that a matrix with zero rows still transposes to
/// `cols` empty rows.
///
/// # Panics
///
/// Panics if any row is shorter than `cols`. Callers validate the shape first
/// (see [`validate_problem`](crate::domain::validate::validate_problem)).
pub fn transpose(matrix: &[Vec<f64>], cols: usize) -> Vec<Vec<f64>> {
    (0..cols)
        .map(|j| matrix.iter().map(|row| row[j]).collect())
        .collect()
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_rows_flips_every_coefficient() {
        let matrix = vec![vec![1.0, -2.0], vec![0.0, 3.5]];
        assert_eq!(
            negate_rows(&matrix),
            vec![vec![-1.0, 2.0], vec![-0.0, -3.5]]
        );
    }

    #[test]
    fn test_transpose_moves_rows_to_columns() {
        let matrix = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let transposed = transpose(&matrix, 3);
        assert_eq!(
            transposed,
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
        assert_eq!(transpose(&transposed, 2), matrix);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[10.0, 12.0, 15.0], &[1.0, 0.5, 2.0]), 46.0);
    }
}
