//! The fixed bijection between the letters `a..z` and the residues `0..25` of Z_26,
//! plus helpers to move between text, vectors and row blocks.

use crate::errors::ClassicalCryptoError;
use crate::ring::{Matrix, Vector, Z26};

use itertools::Itertools;

/// Number of letters, and the modulus of every character cipher.
pub const ALPHABET_LEN: usize = 26;

/// Maps `'a'..='z'` to `0..=25`.
///
/// # Example
///
/// ```
/// # use classical_crypto::alphabet::letter_to_index;
/// assert_eq!(letter_to_index('a').unwrap(), 0);
/// assert_eq!(letter_to_index('z').unwrap(), 25);
/// assert!(letter_to_index('A').is_err());
/// ```
pub fn letter_to_index(letter: char) -> Result<i64, ClassicalCryptoError> {
    if letter.is_ascii_lowercase() {
        Ok((letter as u8 - b'a') as i64)
    } else {
        Err(ClassicalCryptoError::InvalidCharacter(letter))
    }
}

/// Maps a residue back to its letter. The value is reduced mod 26 first, so every `i64` is accepted.
pub fn index_to_letter(index: i64) -> char {
    (b'a' + Z26.normalize(index) as u8) as char
}

pub fn text_to_vector(text: &str) -> Result<Vector, ClassicalCryptoError> {
    text.chars().map(letter_to_index).collect()
}

pub fn vector_to_text(values: &[i64]) -> String {
    values.iter().map(|&v| index_to_letter(v)).collect()
}

pub fn matrix_to_text(rows: &Matrix) -> String {
    rows.iter().map(|row| vector_to_text(row)).join("")
}

/// Splits `values` into rows of length `dim`. A trailing partial row is an error.
pub fn to_rows(values: &[i64], dim: usize) -> Result<Matrix, ClassicalCryptoError> {
    if dim == 0 || values.len() % dim != 0 {
        return Err(ClassicalCryptoError::DimensionMismatch(format!(
            "{} values cannot be split into rows of length {}",
            values.len(),
            dim
        )));
    }
    Ok(values.chunks(dim).map(<[i64]>::to_vec).collect_vec())
}

/// Appends `padding` until the length of `text` is a multiple of `dim`.
pub fn pad_to_multiple(text: &str, dim: usize, padding: char) -> String {
    if dim == 0 {
        return text.to_string();
    }
    let len = text.chars().count();
    let missing = (dim - len % dim) % dim;
    text.chars()
        .chain(std::iter::repeat_n(padding, missing))
        .collect()
}

/// Lower-cases `text` and drops everything outside `a..z`.
///
/// This is the normalization callers apply before handing free-form input to a cipher.
///
/// # Example
///
/// ```
/// # use classical_crypto::alphabet::sanitize;
/// assert_eq!(sanitize("Attack at Dawn!"), "attackatdawn");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bijection_is_total() {
        for (i, letter) in ('a'..='z').enumerate() {
            assert_eq!(letter_to_index(letter).unwrap(), i as i64);
            assert_eq!(index_to_letter(i as i64), letter);
        }
        assert_eq!(index_to_letter(26), 'a');
        assert_eq!(index_to_letter(-1), 'z');
    }

    #[test]
    fn test_rejects_foreign_characters() {
        for c in ['A', ' ', '1', 'é', '-'] {
            assert!(matches!(
                letter_to_index(c),
                Err(ClassicalCryptoError::InvalidCharacter(found)) if found == c
            ));
        }
        assert!(text_to_vector("hello world").is_err());
    }

    #[test]
    fn test_text_vector_conversion() {
        let v = text_to_vector("breathtaking").unwrap();
        assert_eq!(v, vec![1, 17, 4, 0, 19, 7, 19, 0, 10, 8, 13, 6]);
        assert_eq!(vector_to_text(&v), "breathtaking");
        assert_eq!(text_to_vector("").unwrap(), Vector::new());
    }

    #[test]
    fn test_to_rows() {
        let rows = to_rows(&[1, 17, 4, 0, 19, 7], 3).unwrap();
        assert_eq!(rows, vec![vec![1, 17, 4], vec![0, 19, 7]]);
        assert_eq!(matrix_to_text(&rows), "breath");
        assert!(to_rows(&[1, 2, 3], 2).is_err());
        assert!(to_rows(&[1, 2], 0).is_err());
    }

    #[test]
    fn test_pad_to_multiple() {
        assert_eq!(pad_to_multiple("abcde", 3, 'z'), "abcdez");
        assert_eq!(pad_to_multiple("abcdef", 3, 'z'), "abcdef");
        assert_eq!(pad_to_multiple("a", 4, 'x'), "axxx");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Hello, World 42"), "helloworld");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("Ünïcode"), "ncode");
    }
}
