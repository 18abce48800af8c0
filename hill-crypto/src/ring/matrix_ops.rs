use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector};

fn check_square(matrix: &Matrix) -> Result<usize, HillCryptoError> {
    let n = matrix.len();
    if n == 0 {
        return Err(HillCryptoError::DimensionMismatch(
            "Matrix must have at least one row".to_string(),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// Computes the determinant of a square matrix by cofactor expansion along
/// the first row.
///
/// The result is a plain signed integer, not reduced modulo anything; reduce
/// it with [`Ring::normalize`] when a residue is needed. Arithmetic stays in
/// `i64`: entries are expected to be alphabet-sized residues, for which
/// dimensions up to 8 keep the expansion well inside the `i64` range.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is empty or not
/// square.
pub fn determinant(matrix: &Matrix) -> Result<i64, HillCryptoError> {
    check_square(matrix)?;
    Ok(det_unchecked(matrix))
}

fn det_unchecked(matrix: &Matrix) -> i64 {
    let n = matrix.len();
    if n == 1 {
        return matrix[0][0];
    }
    if n == 2 {
        return matrix[0][0] * matrix[1][1] - matrix[0][1] * matrix[1][0];
    }

    let mut det = 0i64;
    for col in 0..n {
        let sign = if col % 2 == 0 { 1 } else { -1 };
        let sub = minor_unchecked(matrix, 0, col);
        det += sign * matrix[0][col] * det_unchecked(&sub);
    }
    det
}

/// Returns the submatrix of `matrix` with row `row` and column `col` removed.
///
/// The minor of a 1x1 matrix is the empty matrix.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is empty, not
/// square, or the indices are out of bounds.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Result<Matrix, HillCryptoError> {
    let n = check_square(matrix)?;
    if row >= n || col >= n {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Minor indices ({}, {}) out of bounds for a {}x{} matrix",
            row, col, n, n
        )));
    }
    Ok(minor_unchecked(matrix, row, col))
}

fn minor_unchecked(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    let n = matrix.len();
    let mut sub = Vec::with_capacity(n.saturating_sub(1));
    for i in 0..n {
        if i == row {
            continue;
        }
        let mut sub_row = Vec::with_capacity(n - 1);
        for j in 0..n {
            if j == col {
                continue;
            }
            sub_row.push(matrix[i][j]);
        }
        sub.push(sub_row);
    }
    sub
}

/// Computes the adjugate, the transposed matrix of cofactors.
///
/// `adjugate(a)[i][j]` is the cofactor of `a[j][i]`, so `a * adjugate(a)`
/// equals `determinant(a)` times the identity over the plain integers. The
/// adjugate of a 1x1 matrix is `[[1]]`.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is empty or not
/// square.
pub fn adjugate(matrix: &Matrix) -> Result<Matrix, HillCryptoError> {
    let n = check_square(matrix)?;
    if n == 1 {
        return Ok(vec![vec![1]]);
    }

    let mut adj = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            let sub = minor_unchecked(matrix, i, j);
            // Transposed on write: cofactor of (i, j) lands at (j, i).
            adj[j][i] = sign * det_unchecked(&sub);
        }
    }
    Ok(adj)
}

/// Inverts a square matrix modulo the ring's modulus via the adjugate:
/// `A^-1 = det(A)^-1 * adj(A) (mod m)`.
///
/// Every entry of the result is reduced into `[0, m)`.
///
/// # Errors
///
/// Returns `HillCryptoError::SingularMatrix` if `gcd(det(A), m) != 1`,
/// including the `det(A) = 0 (mod m)` case.
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is empty or not
/// square.
pub fn invert_modular(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let det = determinant(matrix)?;
    let det_norm = ring.normalize(det);
    let det_inv = ring.inv(det_norm).map_err(|e| {
        HillCryptoError::SingularMatrix(format!(
            "Determinant {} is not a unit mod {}: {}",
            det_norm,
            ring.modulus(),
            e
        ))
    })?;

    let adj = adjugate(matrix)?;
    let n = adj.len();
    let mut inv = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            inv[i][j] = ring.mul(det_inv, adj[i][j]);
        }
    }
    Ok(inv)
}

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector with every component reduced into `[0, modulus)`.
pub fn matrix_vector_mul(a: &Matrix, x: &[i64], ring: &Ring) -> Result<Vector, HillCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    if m_common == 0 {
        return Ok(vec![Vec::new(); n]);
    }
    let p = b[0].len(); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(HillCryptoError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
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
