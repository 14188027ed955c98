//! # Cipher Module
//!
//! Classical character ciphers over Z_26. The scalar ciphers ([`shift`], [`affine`], [`autokey`])
//! work letter by letter; [`hill`] and [`affine_hill`] work on row vectors of letters and also
//! support known-plaintext key recovery.

pub mod affine;
pub mod affine_hill;
pub mod autokey;
pub mod hill;
pub mod key_file;
pub mod shift;

use crate::errors::ClassicalCryptoError;

pub use affine::AffineCipher;
pub use affine_hill::{AffineHillCipher, AffineHillKey};
pub use autokey::AutokeyCipher;
pub use hill::HillCipher;
pub use key_file::CipherKey;
pub use shift::ShiftCipher;

/// A keyed cipher over lower-case `a..z` text.
pub trait Cipher {
    fn encrypt(&self, plain_text: &str) -> Result<String, ClassicalCryptoError>;
    fn decrypt(&self, cipher_text: &str) -> Result<String, ClassicalCryptoError>;
}
