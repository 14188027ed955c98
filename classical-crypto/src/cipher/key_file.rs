use crate::cipher::affine_hill::{AffineHillCipher, AffineHillKey};
use crate::cipher::hill::DEFAULT_PADDING;
use crate::cipher::{AffineCipher, AutokeyCipher, Cipher, HillCipher, ShiftCipher};
use crate::errors::ClassicalCryptoError;
use crate::ring::{Matrix, Vector};

use serde::{Deserialize, Serialize};

/// Serializable description of a key for any supported cipher.
///
/// The JSON form is tagged by family, e.g.
/// `{"cipher": "hill", "matrix": [[3, 3], [2, 5]], "padding": "z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "kebab-case")]
pub enum CipherKey {
    Shift {
        key: i64,
    },
    Affine {
        a: i64,
        b: i64,
    },
    Autokey {
        key: i64,
    },
    Hill {
        matrix: Matrix,
        #[serde(default = "default_padding")]
        padding: char,
    },
    AffineHill {
        l: Matrix,
        b: Vector,
    },
}

fn default_padding() -> char {
    DEFAULT_PADDING
}

impl CipherKey {
    pub fn family(&self) -> &'static str {
        match self {
            CipherKey::Shift { .. } => "shift",
            CipherKey::Affine { .. } => "affine",
            CipherKey::Autokey { .. } => "autokey",
            CipherKey::Hill { .. } => "hill",
            CipherKey::AffineHill { .. } => "affine-hill",
        }
    }

    /// Validates the key and builds the matching cipher.
    pub fn into_cipher(self) -> Result<Box<dyn Cipher>, ClassicalCryptoError> {
        Ok(match self {
            CipherKey::Shift { key } => Box::new(ShiftCipher::new(key)),
            CipherKey::Affine { a, b } => Box::new(AffineCipher::try_with(a, b)?),
            CipherKey::Autokey { key } => Box::new(AutokeyCipher::new(key)),
            CipherKey::Hill { matrix, padding } => {
                Box::new(HillCipher::try_with(matrix)?.with_padding(padding)?)
            }
            CipherKey::AffineHill { l, b } => {
                Box::new(AffineHillCipher::try_with(AffineHillKey { l, b })?)
            }
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ClassicalCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ClassicalCryptoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<AffineHillKey> for CipherKey {
    fn from(key: AffineHillKey) -> Self {
        CipherKey::AffineHill { l: key.l, b: key.b }
    }
}
