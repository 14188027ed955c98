//! Affine-Hill cipher: `y = x · L + b (mod 26)` per block of `dim(L)` letters.

use crate::alphabet::{ALPHABET_LEN, matrix_to_text, pad_to_multiple, text_to_vector, to_rows};
use crate::cipher::Cipher;
use crate::cipher::hill::{self, DEFAULT_PADDING, known_pair};
use crate::errors::ClassicalCryptoError;
use crate::ring::matrix_ops::{
    is_square, matrix_inverse, matrix_mul, matrix_sub, vector_add, vector_matrix_mul, vector_sub,
};
use crate::ring::{Matrix, Vector, Z26};

use num_integer::Roots;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The pair `(L, b)`: an invertible square matrix and a shift vector of the same dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffineHillKey {
    pub l: Matrix,
    pub b: Vector,
}

impl AffineHillKey {
    /// Random invertible `L` and uniformly random `b`.
    pub fn random<R: Rng>(dim: usize, rng: &mut R) -> Result<Self, ClassicalCryptoError> {
        let l = hill::random_key(dim, rng)?;
        let b = (0..dim).map(|_| rng.random_range(0..ALPHABET_LEN as i64)).collect();
        Ok(Self { l, b })
    }
}

/// Checks `L` is a non-empty square matrix and `len(b) == dim(L)`.
fn validate_shape(l: &Matrix, b: &Vector) -> Result<usize, ClassicalCryptoError> {
    let dim = l.len();
    if dim == 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(
            "key matrix L is empty".into(),
        ));
    }
    if !is_square(l) {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "key matrix L must be square ({} rows)",
            dim
        )));
    }
    if b.len() != dim {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "shift vector b has length {} but L is {}x{}",
            b.len(),
            dim,
            dim
        )));
    }
    Ok(dim)
}

/// Pads with `z` to a multiple of `dim(L)` and maps each block `x` to `x · L + b mod 26`.
///
/// # Errors
///
/// `DimensionMismatch` when `L` is not square or `b` has the wrong length, `SingularMatrix` when
/// `L` is not invertible mod 26, `EmptyInput` for an empty plaintext.
pub fn encrypt(plain_text: &str, l: &Matrix, b: &Vector) -> Result<String, ClassicalCryptoError> {
    let dim = validate_shape(l, b)?;
    matrix_inverse(l, &Z26)?;
    if plain_text.is_empty() {
        return Err(ClassicalCryptoError::EmptyInput);
    }

    let padded = pad_to_multiple(plain_text, dim, DEFAULT_PADDING);
    let cipher_rows = to_rows(&text_to_vector(&padded)?, dim)?
        .iter()
        .map(|row| vector_add(&vector_matrix_mul(row, l, &Z26)?, b, &Z26))
        .collect::<Result<Matrix, _>>()?;

    Ok(matrix_to_text(&cipher_rows))
}

/// Maps each block `y` to `(y - b) · L⁻¹ mod 26`. Like Hill decryption, no padding is invented.
pub fn decrypt(cipher_text: &str, l: &Matrix, b: &Vector) -> Result<String, ClassicalCryptoError> {
    let dim = validate_shape(l, b)?;
    let values = text_to_vector(cipher_text)?;
    if values.len() % dim != 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "ciphertext length {} is not a multiple of the key dimension {}",
            values.len(),
            dim
        )));
    }

    let l_inv = matrix_inverse(l, &Z26)?;
    let plain_rows = to_rows(&values, dim)?
        .iter()
        .map(|row| vector_matrix_mul(&vector_sub(row, b, &Z26)?, &l_inv, &Z26))
        .collect::<Result<Matrix, _>>()?;

    Ok(matrix_to_text(&plain_rows))
}

/// Recovers `(L, b)` from a known plaintext/ciphertext pair.
///
/// Subtracting two blocks removes the shift: `y1 - y2 = (x1 - x2) · L`. For each dimension
/// `d` in `2..⌊√len⌋` (ascending, and only while `2d² <= len`), block 1 is rows `[0, d)` and
/// block 2 is rows `[d, 2d)`. `Ok(None)` means no dimension yielded an invertible `L`.
///
/// # Errors
///
/// `LengthMismatch` when the texts differ in length; `InvalidCharacter` for non `a..z` input.
pub fn find_key(
    plain_text: &str,
    cipher_text: &str,
) -> Result<Option<AffineHillKey>, ClassicalCryptoError> {
    let (plain, cipher) = known_pair(plain_text, cipher_text)?;
    let len = plain.len();

    for dim in (2..len.sqrt()).take_while(|d| 2 * d * d <= len) {
        match key_for_dimension(&plain, &cipher, dim) {
            Ok(key) => {
                log::debug!("affine-hill key found at dimension {}", dim);
                return Ok(Some(key));
            }
            Err(e) if e.is_singular() => {
                log::debug!("affine-hill key search: dimension {} rejected: {}", dim, e);
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("affine-hill key search exhausted for {} letters", len);
    Ok(None)
}

fn key_for_dimension(
    plain: &[i64],
    cipher: &[i64],
    dim: usize,
) -> Result<AffineHillKey, ClassicalCryptoError> {
    let block = dim * dim;
    let plain_1 = to_rows(&plain[..block], dim)?;
    let plain_2 = to_rows(&plain[block..2 * block], dim)?;
    let cipher_1 = to_rows(&cipher[..block], dim)?;
    let cipher_2 = to_rows(&cipher[block..2 * block], dim)?;

    let diff_plain_inv = matrix_inverse(&matrix_sub(&plain_1, &plain_2, &Z26)?, &Z26)?;
    let diff_cipher = matrix_sub(&cipher_1, &cipher_2, &Z26)?;
    let l = matrix_mul(&diff_plain_inv, &diff_cipher, &Z26)?;

    // y = x·L + b on the first row of block 1
    let b = vector_sub(&cipher_1[0], &vector_matrix_mul(&plain_1[0], &l, &Z26)?, &Z26)?;

    matrix_inverse(&l, &Z26)?;

    Ok(AffineHillKey { l, b })
}

/// A validated affine-Hill key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineHillCipher {
    key: AffineHillKey,
}

impl AffineHillCipher {
    pub fn try_with(key: AffineHillKey) -> Result<Self, ClassicalCryptoError> {
        validate_shape(&key.l, &key.b)?;
        matrix_inverse(&key.l, &Z26)?;
        Ok(Self { key })
    }

    pub fn key(&self) -> &AffineHillKey {
        &self.key
    }
}

impl Cipher for AffineHillCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError> {
        encrypt(plain_text, &self.key.l, &self.key.b)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError> {
        decrypt(cipher_text, &self.key.l, &self.key.b)
    }
}
