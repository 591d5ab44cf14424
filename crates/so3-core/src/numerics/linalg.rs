use faer::Mat;
use num_complex::Complex64;

pub type DenseRealMatrix = Mat<f64>;

const RANK_RELATIVE_EPSILON: f64 = 1.0e-12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeastSquaresError {
    #[error("least-squares solve requires a non-empty matrix")]
    EmptyMatrix,
    #[error("least-squares system is underdetermined: {rows} equations for {cols} unknowns")]
    Underdetermined { rows: usize, cols: usize },
    #[error("matrix is rank deficient at column {column}")]
    RankDeficient { column: usize },
    #[error("right-hand side length mismatch: expected {expected}, got {actual}")]
    RhsLengthMismatch { expected: usize, actual: usize },
}

/// Minimizes `|A x - b|_2` for a real, full column rank `A` and complex `b`
/// by Householder QR.
pub fn least_squares_solve(
    matrix: &DenseRealMatrix,
    rhs: &[Complex64],
) -> Result<Vec<Complex64>, LeastSquaresError> {
    let rows = matrix.nrows();
    let cols = matrix.ncols();
    if rows == 0 || cols == 0 {
        return Err(LeastSquaresError::EmptyMatrix);
    }
    if rows < cols {
        return Err(LeastSquaresError::Underdetermined { rows, cols });
    }
    if rhs.len() != rows {
        return Err(LeastSquaresError::RhsLengthMismatch {
            expected: rows,
            actual: rhs.len(),
        });
    }

    let scale = max_column_norm(matrix);
    let mut r = matrix.clone();
    let mut b = rhs.to_vec();
    let mut reflector = vec![0.0; rows];

    for col in 0..cols {
        let norm = (col..rows)
            .map(|row| r[(row, col)] * r[(row, col)])
            .sum::<f64>()
            .sqrt();
        if norm <= RANK_RELATIVE_EPSILON * scale {
            return Err(LeastSquaresError::RankDeficient { column: col });
        }

        let alpha = if r[(col, col)] > 0.0 { -norm } else { norm };
        for row in col..rows {
            reflector[row] = r[(row, col)];
        }
        reflector[col] -= alpha;
        let reflector_norm_sq: f64 = reflector[col..rows].iter().map(|v| v * v).sum();
        if reflector_norm_sq == 0.0 {
            continue;
        }

        for target in col..cols {
            let dot: f64 = (col..rows)
                .map(|row| reflector[row] * r[(row, target)])
                .sum();
            let factor = 2.0 * dot / reflector_norm_sq;
            for row in col..rows {
                r[(row, target)] -= factor * reflector[row];
            }
        }

        let dot: Complex64 = (col..rows).map(|row| b[row] * reflector[row]).sum();
        let factor = dot * (2.0 / reflector_norm_sq);
        for row in col..rows {
            b[row] -= factor * reflector[row];
        }
    }

    let mut solution = vec![Complex64::new(0.0, 0.0); cols];
    for row in (0..cols).rev() {
        let mut value = b[row];
        for col in (row + 1)..cols {
            value -= solution[col] * r[(row, col)];
        }
        let diagonal = r[(row, row)];
        if diagonal.abs() <= RANK_RELATIVE_EPSILON * scale {
            return Err(LeastSquaresError::RankDeficient { column: row });
        }
        solution[row] = value / diagonal;
    }

    Ok(solution)
}

fn max_column_norm(matrix: &DenseRealMatrix) -> f64 {
    (0..matrix.ncols())
        .map(|col| {
            (0..matrix.nrows())
                .map(|row| matrix[(row, col)] * matrix[(row, col)])
                .sum::<f64>()
                .sqrt()
        })
        .fold(0.0, f64::max)
}
