//! Autokey cipher: the seed key encrypts the first letter, and every later letter is shifted by
//! the plaintext letter before it.

use crate::alphabet::{index_to_letter, letter_to_index};
use crate::cipher::Cipher;
use crate::errors::ClassicalCryptoError;
use crate::ring::Z26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutokeyCipher {
    key: i64,
}

impl AutokeyCipher {
    pub fn new(key: i64) -> Self {
        Self {
            key: Z26.normalize(key),
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }
}

impl Cipher for AutokeyCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError> {
        let mut previous = self.key;
        plain_text
            .chars()
            .map(|c| {
                let x = letter_to_index(c)?;
                let y = Z26.add(x, previous);
                previous = x;
                Ok(index_to_letter(y))
            })
            .collect()
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError> {
        let mut previous = self.key;
        cipher_text
            .chars()
            .map(|c| {
                let x = Z26.sub(letter_to_index(c)?, previous);
                previous = x;
                Ok(index_to_letter(x))
            })
            .collect()
    }
}
