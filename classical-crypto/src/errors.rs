#[derive(thiserror::Error, Debug)]
pub enum ClassicalCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Determinant, adjugate or inverse requested for a non-square matrix.
    #[error("NotSquare: {0}")]
    NotSquare(String),
    /// gcd(det(A), m) != 1, so A has no inverse over Z_m.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
    /// Shapes disagree: ragged rows, key vs shift vector, or text not a whole number of blocks.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Plaintext and ciphertext of a known-plaintext pair differ in length.
    #[error("LengthMismatch: plaintext has {plain} characters, ciphertext has {cipher}")]
    LengthMismatch { plain: usize, cipher: usize },

    #[error("Character {0:?} is outside the a-z alphabet")]
    InvalidCharacter(char),
    #[error("Input text must not be empty")]
    EmptyInput,
    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ClassicalCryptoError {
    /// `true` for the error that key recovery treats as "try the next dimension".
    pub fn is_singular(&self) -> bool {
        matches!(self, ClassicalCryptoError::SingularMatrix(_))
    }
}
