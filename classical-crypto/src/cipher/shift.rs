//! Shift (Caesar) cipher: `y = x + k (mod 26)`.

use crate::alphabet::{index_to_letter, letter_to_index};
use crate::cipher::Cipher;
use crate::errors::ClassicalCryptoError;
use crate::ring::Z26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    key: i64,
}

impl ShiftCipher {
    /// Any integer is a valid shift; it is reduced into `[0, 26)`.
    pub fn new(key: i64) -> Self {
        Self {
            key: Z26.normalize(key),
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    fn shift(&self, text: &str, by: i64) -> Result<String, ClassicalCryptoError> {
        text.chars()
            .map(|c| Ok(index_to_letter(Z26.add(letter_to_index(c)?, by))))
            .collect()
    }
}

impl Cipher for ShiftCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError> {
        self.shift(plain_text, self.key)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError> {
        self.shift(cipher_text, -self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_three() -> Result<(), ClassicalCryptoError> {
        let cipher = ShiftCipher::new(3);
        assert_eq!(cipher.encrypt("xyzabc")?, "abcdef");
        assert_eq!(cipher.decrypt("abcdef")?, "xyzabc");
        Ok(())
    }

    #[test]
    fn test_key_is_reduced() -> Result<(), ClassicalCryptoError> {
        assert_eq!(ShiftCipher::new(29).key(), 3);
        assert_eq!(ShiftCipher::new(-1).key(), 25);
        assert_eq!(ShiftCipher::new(-1).encrypt("a")?, "z");
        assert_eq!(ShiftCipher::new(26).encrypt("hello")?, "hello");
        Ok(())
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert!(matches!(
            ShiftCipher::new(1).encrypt("hello world"),
            Err(ClassicalCryptoError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn test_empty_text() -> Result<(), ClassicalCryptoError> {
        assert_eq!(ShiftCipher::new(5).encrypt("")?, "");
        Ok(())
    }
}
