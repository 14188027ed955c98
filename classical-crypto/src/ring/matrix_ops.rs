use crate::errors::ClassicalCryptoError;
use crate::ring::{Matrix, Ring, Vector, gcd, is_coprime};

/// Returns `n` when `matrix` is n×n, `NotSquare` otherwise.
pub fn square_dim(matrix: &Matrix) -> Result<usize, ClassicalCryptoError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicalCryptoError::NotSquare(format!(
                "matrix has {} rows but row {} has length {}",
                n,
                i,
                row.len()
            )));
        }
    }
    Ok(n)
}

/// `true` when every row has as many entries as there are rows.
pub fn is_square(matrix: &Matrix) -> bool {
    square_dim(matrix).is_ok()
}

/// Reduces every entry of `matrix` into `[0, m)`.
pub fn reduce_matrix(matrix: &Matrix, ring: &Ring) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect()
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &Vector, a: &Matrix, ring: &Ring) -> Result<Vector, ClassicalCryptoError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicalCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for (j, yj) in y.iter_mut().enumerate() {
        let mut sum = 0i64;
        for i in 0..m {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        *yj = sum;
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, ClassicalCryptoError> {
    if a.len() != b.len() {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.add(x, y)).collect())
}

/// Computes the vector difference `c = a - b` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_sub(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, ClassicalCryptoError> {
    if a.len() != b.len() {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.sub(x, y)).collect())
}

/// Elementwise `C = A - B` modulo `m`, every entry normalized into `[0, m)`.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::DimensionMismatch` if the shapes differ.
pub fn matrix_sub(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicalCryptoError> {
    if a.len() != b.len() {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Matrices must have the same number of rows for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    a.iter()
        .zip(b)
        .map(|(row_a, row_b)| vector_sub(row_a, row_b, ring))
        .collect()
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicalCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    if m_common == 0 {
        return Ok(vec![Vec::new(); n]);
    }
    let p = b[0].len(); // cols in B

    for (k, row) in b.iter().enumerate() {
        if row.len() != p {
            return Err(ClassicalCryptoError::DimensionMismatch(format!(
                "Matrix B row {} has incorrect length (expected {})",
                k, p
            )));
        }
    }

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(ClassicalCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Exact integer determinant of a square matrix (not reduced by any modulus).
///
/// Uses fraction-free Bareiss elimination: every intermediate value is itself the
/// determinant of a minor, so each division below is exact and no rational or
/// floating-point arithmetic is needed. The determinant of the empty matrix is 1.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::NotSquare` for a non-square input and
/// `ClassicalCryptoError::CalculationOverflow` if an intermediate leaves `i128`
/// or the result does not fit `i64`.
pub fn determinant(matrix: &Matrix) -> Result<i64, ClassicalCryptoError> {
    let n = square_dim(matrix)?;
    if n == 0 {
        return Ok(1);
    }

    let mut a: Vec<Vec<i128>> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| v as i128).collect())
        .collect();
    let mut negate = false;
    let mut prev: i128 = 1;

    for k in 0..n - 1 {
        if a[k][k] == 0 {
            let Some(pivot) = (k + 1..n).find(|&i| a[i][k] != 0) else {
                return Ok(0);
            };
            a.swap(k, pivot);
            negate = !negate;
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let lhs = a[i][j]
                    .checked_mul(a[k][k])
                    .ok_or(ClassicalCryptoError::CalculationOverflow)?;
                let rhs = a[i][k]
                    .checked_mul(a[k][j])
                    .ok_or(ClassicalCryptoError::CalculationOverflow)?;
                a[i][j] = lhs
                    .checked_sub(rhs)
                    .ok_or(ClassicalCryptoError::CalculationOverflow)?
                    / prev;
            }
        }
        prev = a[k][k];
    }

    let det = if negate { -a[n - 1][n - 1] } else { a[n - 1][n - 1] };
    i64::try_from(det).map_err(|_| ClassicalCryptoError::CalculationOverflow)
}

/// The matrix with row `skip_row` and column `skip_col` removed.
fn minor(matrix: &Matrix, skip_row: usize, skip_col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(r, _)| r != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(c, _)| c != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Classical adjugate: the transpose of the integer cofactor matrix, so that
/// `A · adj(A) = det(A) · I` holds over the integers.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::NotSquare` for a non-square input and
/// `ClassicalCryptoError::CalculationOverflow` if a cofactor does not fit `i64`.
pub fn adjugate(matrix: &Matrix) -> Result<Matrix, ClassicalCryptoError> {
    let n = square_dim(matrix)?;
    if n == 1 {
        return Ok(vec![vec![1]]);
    }

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let cofactor = determinant(&minor(matrix, i, j))?;
            // transpose while storing: adj[j][i] = C[i][j]
            adj[j][i] = if (i + j) % 2 == 0 {
                cofactor
            } else {
                cofactor
                    .checked_neg()
                    .ok_or(ClassicalCryptoError::CalculationOverflow)?
            };
        }
    }
    Ok(adj)
}

/// `matrix[target] -= factor · matrix[source]` over `ring`.
fn subtract_row(matrix: &mut Matrix, target: usize, source: usize, factor: i64, ring: &Ring) {
    let source_row = matrix[source].clone();
    for (t, &s) in matrix[target].iter_mut().zip(&source_row) {
        *t = ring.sub(*t, ring.mul(factor, s));
    }
}

/// Brings a reduced square matrix to upper-triangular form over `ring` using only row swaps and
/// `row_i -= q · row_j`, replaying every operation on `companion`.
///
/// Each column is cleared by running Euclid's algorithm on pairs of rows, so no division by a
/// non-unit is ever needed and every entry stays in `[0, m)`. Returns `true` when an odd number
/// of swaps happened.
fn triangularize(a: &mut Matrix, companion: &mut Matrix, ring: &Ring) -> bool {
    let n = a.len();
    let mut odd_swaps = false;
    for col in 0..n {
        for row in col + 1..n {
            while a[row][col] != 0 {
                let q = a[col][col] / a[row][col];
                subtract_row(a, col, row, q, ring);
                subtract_row(companion, col, row, q, ring);
                a.swap(col, row);
                companion.swap(col, row);
                odd_swaps = !odd_swaps;
            }
        }
    }
    odd_swaps
}

fn diagonal_product(a: &Matrix, odd_swaps: bool, ring: &Ring) -> i64 {
    let product = (0..a.len()).fold(1, |acc, i| ring.mul(acc, a[i][i]));
    if odd_swaps { ring.sub(0, product) } else { product }
}

/// `det(A) mod m`, computed without leaving `[0, m)`.
///
/// Unlike [`determinant`] this never overflows, whatever the size of the matrix or its entries.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::NotSquare` for a non-square input.
///
/// # Example
///
/// ```
/// # use classical_crypto::ring::Z26;
/// # use classical_crypto::ring::matrix_ops::determinant_mod;
/// // 1007 = 38 · 26 + 19
/// let a = vec![vec![1, 17, 4], vec![0, 19, 7], vec![19, 0, 10]];
/// assert_eq!(determinant_mod(&a, &Z26).unwrap(), 19);
/// ```
pub fn determinant_mod(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicalCryptoError> {
    let n = square_dim(matrix)?;
    let mut a = reduce_matrix(matrix, ring);
    let mut untracked = vec![Vector::new(); n];
    let odd_swaps = triangularize(&mut a, &mut untracked, ring);
    Ok(diagonal_product(&a, odd_swaps, ring))
}

/// Computes the inverse of a square matrix over Z_m, equal to `det(A)^-1 · adj(A) mod m`.
///
/// Entries are reduced mod m first and the elimination runs entirely inside Z_m, so any
/// integer matrix is accepted and the result has every entry in `[0, m)`.
///
/// # Errors
///
/// Returns `ClassicalCryptoError::NotSquare` if the matrix is not square and
/// `ClassicalCryptoError::SingularMatrix` if `gcd(det(A), m) != 1`.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicalCryptoError> {
    let n = square_dim(matrix)?;
    let mut a = reduce_matrix(matrix, ring);
    let mut inv = identity_matrix(n);

    let odd_swaps = triangularize(&mut a, &mut inv, ring);
    let det = diagonal_product(&a, odd_swaps, ring);
    let m = ring.modulus() as i64;
    if !is_coprime(det, m) {
        return Err(ClassicalCryptoError::SingularMatrix(format!(
            "det(A) = {} (mod {}) is not invertible (gcd={})",
            det,
            m,
            gcd(det, m)
        )));
    }

    // the pivots multiply to a unit, so each of them is a unit
    for col in (0..n).rev() {
        let pivot_inv = ring.inv(a[col][col])?;
        for v in a[col].iter_mut().chain(inv[col].iter_mut()) {
            *v = ring.mul(pivot_inv, *v);
        }
        for row in 0..col {
            let factor = a[row][col];
            subtract_row(&mut a, row, col, factor, ring);
            subtract_row(&mut inv, row, col, factor, ring);
        }
    }

    Ok(inv)
}
