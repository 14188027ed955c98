//! Hill cipher: `C = P · K (mod 26)` where every row of `P` is one block of `dim(K)` letters.

use crate::alphabet::{
    ALPHABET_LEN, letter_to_index, matrix_to_text, pad_to_multiple, text_to_vector, to_rows,
};
use crate::cipher::Cipher;
use crate::errors::ClassicalCryptoError;
use crate::ring::matrix_ops::{matrix_inverse, matrix_mul, square_dim};
use crate::ring::{Matrix, Vector, Z26};

use num_integer::Roots;
use rand::Rng;

/// Filler appended to the plaintext until its length is a multiple of the key dimension.
pub const DEFAULT_PADDING: char = 'z';

const MAX_KEYGEN_ATTEMPTS: usize = 1000;

/// Dimension of a usable key matrix: square and non-empty.
pub(crate) fn key_dim(key: &Matrix) -> Result<usize, ClassicalCryptoError> {
    let n = square_dim(key)?;
    if n == 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(
            "key matrix is empty".into(),
        ));
    }
    Ok(n)
}

/// Encrypts with the default `z` padding. See [`encrypt_with_padding`].
pub fn encrypt(plain_text: &str, key: &Matrix) -> Result<String, ClassicalCryptoError> {
    encrypt_with_padding(plain_text, key, DEFAULT_PADDING)
}

/// Pads `plain_text` with `padding` to a multiple of `dim(key)` and maps each block `p` to `p · key mod 26`.
///
/// # Errors
///
/// The key is validated before anything else: `NotSquare` or `DimensionMismatch` for a malformed
/// key, `SingularMatrix` when it is not invertible mod 26. An empty plaintext is `EmptyInput`.
pub fn encrypt_with_padding(
    plain_text: &str,
    key: &Matrix,
    padding: char,
) -> Result<String, ClassicalCryptoError> {
    let dim = key_dim(key)?;
    matrix_inverse(key, &Z26)?;
    letter_to_index(padding)?;
    if plain_text.is_empty() {
        return Err(ClassicalCryptoError::EmptyInput);
    }

    let padded = pad_to_multiple(plain_text, dim, padding);
    let plain_rows = to_rows(&text_to_vector(&padded)?, dim)?;
    let cipher_rows = matrix_mul(&plain_rows, key, &Z26)?;

    Ok(matrix_to_text(&cipher_rows))
}

/// Maps each block `c` of `cipher_text` to `c · key⁻¹ mod 26`.
///
/// No padding is invented here: a ciphertext whose length is not a multiple of `dim(key)` is
/// rejected, and padding added during encryption is left in the output.
pub fn decrypt(cipher_text: &str, key: &Matrix) -> Result<String, ClassicalCryptoError> {
    let dim = key_dim(key)?;
    let values = text_to_vector(cipher_text)?;
    if values.len() % dim != 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "ciphertext length {} is not a multiple of the key dimension {}",
            values.len(),
            dim
        )));
    }

    let key_inv = matrix_inverse(key, &Z26)?;
    let cipher_rows = to_rows(&values, dim)?;
    let plain_rows = matrix_mul(&cipher_rows, &key_inv, &Z26)?;

    Ok(matrix_to_text(&plain_rows))
}

/// Recovers a Hill key from a known plaintext/ciphertext pair.
///
/// Candidate dimensions `2..=⌊√len⌋` are tried in ascending order, so the first key returned has
/// the smallest dimension that works. `Ok(None)` means no dimension produced a usable key (the
/// sample is too short, or the pair is not a Hill pair).
///
/// # Errors
///
/// `LengthMismatch` when the texts differ in length; `InvalidCharacter` for non `a..z` input.
pub fn find_key(plain_text: &str, cipher_text: &str) -> Result<Option<Matrix>, ClassicalCryptoError> {
    let (plain, cipher) = known_pair(plain_text, cipher_text)?;

    for dim in 2..=plain.len().sqrt() {
        match key_for_dimension(&plain, &cipher, dim) {
            Ok(key) => {
                log::debug!("hill key found at dimension {}", dim);
                return Ok(Some(key));
            }
            Err(e) if e.is_singular() => {
                log::debug!("hill key search: dimension {} rejected: {}", dim, e);
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("hill key search exhausted for {} letters", plain.len());
    Ok(None)
}

/// Validates a known-plaintext pair and converts both sides to residues.
pub(crate) fn known_pair(
    plain_text: &str,
    cipher_text: &str,
) -> Result<(Vector, Vector), ClassicalCryptoError> {
    let plain_len = plain_text.chars().count();
    let cipher_len = cipher_text.chars().count();
    if plain_len != cipher_len {
        return Err(ClassicalCryptoError::LengthMismatch {
            plain: plain_len,
            cipher: cipher_len,
        });
    }
    Ok((text_to_vector(plain_text)?, text_to_vector(cipher_text)?))
}

/// `K = P⁻¹ · C` from the leading `dim × dim` blocks, accepted only if `K` is itself invertible.
fn key_for_dimension(plain: &[i64], cipher: &[i64], dim: usize) -> Result<Matrix, ClassicalCryptoError> {
    let block = dim * dim;
    let plain_block = to_rows(&plain[..block], dim)?;
    let cipher_block = to_rows(&cipher[..block], dim)?;

    let plain_inv = matrix_inverse(&plain_block, &Z26)?;
    let key = matrix_mul(&plain_inv, &cipher_block, &Z26)?;
    // a key that cannot decrypt is not a solution
    matrix_inverse(&key, &Z26)?;

    Ok(key)
}

/// Draws uniformly random `dim × dim` matrices until one is invertible mod 26.
pub fn random_key<R: Rng>(dim: usize, rng: &mut R) -> Result<Matrix, ClassicalCryptoError> {
    if dim == 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(
            "key dimension must be at least 1".into(),
        ));
    }

    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        let candidate: Matrix = (0..dim)
            .map(|_| (0..dim).map(|_| rng.random_range(0..ALPHABET_LEN as i64)).collect())
            .collect();
        match matrix_inverse(&candidate, &Z26) {
            Ok(_) => {
                log::trace!("invertible {}x{} key after {} attempts", dim, dim, attempt);
                return Ok(candidate);
            }
            Err(e) if e.is_singular() => continue,
            Err(e) => return Err(e),
        }
    }

    Err(ClassicalCryptoError::InternalError(format!(
        "could not generate an invertible {}x{} key after {} tries",
        dim, dim, MAX_KEYGEN_ATTEMPTS
    )))
}

/// A validated Hill key together with its padding character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: Matrix,
    padding: char,
}

impl HillCipher {
    /// Accepts `key` only if it is square, non-empty and invertible mod 26.
    pub fn try_with(key: Matrix) -> Result<Self, ClassicalCryptoError> {
        key_dim(&key)?;
        matrix_inverse(&key, &Z26)?;
        Ok(Self {
            key,
            padding: DEFAULT_PADDING,
        })
    }

    pub fn with_padding(mut self, padding: char) -> Result<Self, ClassicalCryptoError> {
        letter_to_index(padding)?;
        self.padding = padding;
        Ok(self)
    }

    pub fn key(&self) -> &Matrix {
        &self.key
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    pub fn dim(&self) -> usize {
        self.key.len()
    }
}

impl Cipher for HillCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError> {
        encrypt_with_padding(plain_text, &self.key, self.padding)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError> {
        decrypt(cipher_text, &self.key)
    }
}
