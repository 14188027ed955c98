//! Implementation of ring ops using modular arithmetic.

use crate::errors::ClassicalCryptoError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// The ring every character cipher works in: one residue per letter a..z.
pub const Z26: Ring = Ring { modulus: 26 };

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Z26
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicalCryptoError> {
        if modulus <= 1 {
            return Err(ClassicalCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(ClassicalCryptoError::InvalidModulus(format!(
                "Modulus {} does not fit into i64",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Z26;
    /// assert_eq!(Z26.normalize(30), 4);
    /// assert_eq!(Z26.normalize(-3), 23);
    /// assert_eq!(Z26.normalize(0), 0);
    /// assert_eq!(Z26.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Reduces an `i128` intermediate (determinants, cofactors) into the ring.
    pub fn normalize_wide(&self, value: i128) -> i64 {
        value.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// assert_eq!(ring.add(12, 13), 5);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize_wide(a_norm as i128 + b_norm as i128)
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// Both operands are normalized first, so the result is always a non-negative representative.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm - b_norm)
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Z26;
    /// assert_eq!(Z26.mul(7, 15), 1); // 105 mod 26 = 1
    /// assert_eq!(Z26.mul(-2, 6), 14); // -12 mod 26 = 14
    /// assert_eq!(Z26.mul(2, 13), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize_wide(a_norm as i128 * b_norm as i128)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm, so it works for any modulus.
    ///
    /// # Errors
    ///
    /// Returns `ClassicalCryptoError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    /// Returns `ClassicalCryptoError::NoInverse` if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use classical_crypto::ring::Z26;
    /// assert_eq!(Z26.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert_eq!(Z26.inv(25).unwrap(), 25);
    /// assert!(Z26.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(Z26.inv(13).is_err());
    /// assert!(Z26.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicalCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(ClassicalCryptoError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ClassicalCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}

/// Returns `x` in `[0, m)` with `a * x ≡ 1 (mod m)`.
///
/// Convenience wrapper over [`Ring::try_with`] and [`Ring::inv`].
pub fn scalar_inverse(a: i64, modulus: u64) -> Result<i64, ClassicalCryptoError> {
    Ring::try_with(modulus)?.inv(a)
}
