#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when a key matrix is not invertible modulo the alphabet length.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
    /// Error when ciphertext length is not a multiple of the key dimension.
    #[error("MisalignedInput: expected a multiple of {expected} residues, got {actual}")]
    MisalignedInput { expected: usize, actual: usize },

    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("Key dimension {0} exceeds the supported maximum of {1}")]
    MatrixTooLarge(usize, usize),
    #[error("DecodingError: {0}")]
    DecodingError(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
