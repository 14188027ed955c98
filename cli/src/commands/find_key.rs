use anyhow::{Context as AnyhowContext, Result};
use clap::Args;
use classical_crypto::CipherKey;
use classical_crypto::alphabet::sanitize;
use classical_crypto::cipher::hill::DEFAULT_PADDING;
use classical_crypto::cipher::{affine_hill, hill};
use serde_json::json;

use super::{Context, Family};
use crate::output::{emit_key, print_info, print_json};

#[derive(Args)]
pub struct FindKeyArgs {
    /// Cipher family to attack
    #[arg(long, value_enum)]
    pub family: Family,

    /// Known plaintext
    pub plain: String,

    /// Matching ciphertext
    pub cipher: String,

    /// Save the recovered key as a JSON key file
    #[arg(long)]
    pub out: Option<String>,
}

pub fn recover(family: Family, plain: &str, cipher: &str) -> Result<Option<CipherKey>> {
    let key = match family {
        Family::Hill => hill::find_key(plain, cipher)
            .context("Hill key search failed")?
            .map(|matrix| CipherKey::Hill {
                matrix,
                padding: DEFAULT_PADDING,
            }),
        Family::AffineHill => affine_hill::find_key(plain, cipher)
            .context("Affine-Hill key search failed")?
            .map(CipherKey::from),
    };
    Ok(key)
}

pub fn run(args: FindKeyArgs, ctx: &Context) -> Result<()> {
    let plain = sanitize(&args.plain);
    let cipher = sanitize(&args.cipher);

    match recover(args.family, &plain, &cipher)? {
        Some(key) => emit_key(&key, args.out.as_deref(), ctx.json_output),
        None if ctx.json_output => print_json(&json!({ "found": false })),
        None => {
            print_info("No invertible key found for this plaintext/ciphertext pair");
            Ok(())
        }
    }
}
