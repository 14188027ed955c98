//! Affine cipher: `y = a·x + b (mod 26)`, decrypted with `x = a⁻¹·(y - b)`.

use crate::alphabet::{index_to_letter, letter_to_index};
use crate::cipher::Cipher;
use crate::errors::ClassicalCryptoError;
use crate::ring::Z26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineCipher {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineCipher {
    /// # Errors
    ///
    /// Returns `ClassicalCryptoError::NoInverse` when `gcd(a, 26) != 1`, since such a key
    /// cannot be decrypted.
    pub fn try_with(a: i64, b: i64) -> Result<Self, ClassicalCryptoError> {
        let a_inv = Z26.inv(a)?;
        Ok(Self {
            a: Z26.normalize(a),
            b: Z26.normalize(b),
            a_inv,
        })
    }

    pub fn key(&self) -> (i64, i64) {
        (self.a, self.b)
    }
}

impl Cipher for AffineCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError> {
        plain_text
            .chars()
            .map(|c| {
                let x = letter_to_index(c)?;
                Ok(index_to_letter(Z26.add(Z26.mul(self.a, x), self.b)))
            })
            .collect()
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError> {
        cipher_text
            .chars()
            .map(|c| {
                let y = letter_to_index(c)?;
                Ok(index_to_letter(Z26.mul(self.a_inv, Z26.sub(y, self.b))))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() -> Result<(), ClassicalCryptoError> {
        // h: 7·7 + 3 = 52 ≡ 0, o: 7·14 + 3 = 101 ≡ 23, t: 7·19 + 3 = 136 ≡ 6, p: 7·15 + 3 = 108 ≡ 4
        let cipher = AffineCipher::try_with(7, 3)?;
        assert_eq!(cipher.encrypt("hotp")?, "axge");
        assert_eq!(cipher.decrypt("axge")?, "hotp");
        Ok(())
    }

    #[test]
    fn test_rejects_non_unit_multiplier() {
        for a in [0, 2, 13, 26] {
            assert!(matches!(
                AffineCipher::try_with(a, 5),
                Err(ClassicalCryptoError::NoInverse(_))
            ));
        }
    }

    #[test]
    fn test_key_is_reduced() -> Result<(), ClassicalCryptoError> {
        let cipher = AffineCipher::try_with(-19, 30)?;
        assert_eq!(cipher.key(), (7, 4));
        Ok(())
    }

    #[test]
    fn test_round_trip_every_unit() -> Result<(), ClassicalCryptoError> {
        let text = "thequickbrownfoxjumpsoverthelazydog";
        for a in (1..26).filter(|a| a % 2 == 1 && *a != 13) {
            let cipher = AffineCipher::try_with(a, 11)?;
            assert_eq!(cipher.decrypt(&cipher.encrypt(text)?)?, text);
        }
        Ok(())
    }
}
