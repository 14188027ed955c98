//! # Classical Crypto
//!
//! Classical ciphers over Z_26 (shift, affine, autokey, Hill, affine-Hill) built on exact
//! modular linear algebra, including known-plaintext key recovery for the Hill family.

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod ring;

pub use cipher::{Cipher, CipherKey};
pub use errors::ClassicalCryptoError;
