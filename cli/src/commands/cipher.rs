use anyhow::{Context as AnyhowContext, Result};
use clap::Args;
use classical_crypto::CipherKey;
use classical_crypto::alphabet::sanitize;
use serde::Serialize;
use std::fs;

use super::Context;
use crate::output::print_json;

#[derive(Args)]
pub struct CipherArgs {
    /// JSON key file
    #[arg(long, env = "CLASSICAL_KEY_FILE")]
    pub key_file: String,

    /// Input text; lower-cased and stripped to a-z before use
    pub text: String,
}

#[derive(Serialize)]
struct CipherOutput<'a> {
    cipher: &'a str,
    input: &'a str,
    output: &'a str,
}

pub fn load_key(path: &str) -> Result<CipherKey> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    CipherKey::from_json(&json).with_context(|| format!("Invalid key file {path}"))
}

pub fn encrypt(args: CipherArgs, ctx: &Context) -> Result<()> {
    run(args, ctx, true)
}

pub fn decrypt(args: CipherArgs, ctx: &Context) -> Result<()> {
    run(args, ctx, false)
}

fn run(args: CipherArgs, ctx: &Context, encrypting: bool) -> Result<()> {
    let key = load_key(&args.key_file)?;
    let family = key.family();
    let cipher = key
        .into_cipher()
        .with_context(|| format!("Unusable {family} key in {}", args.key_file))?;

    let input = sanitize(&args.text);
    log::debug!("{} letters of {} input after sanitizing", input.len(), family);

    let output = if encrypting {
        cipher.encrypt(&input).context("Encryption failed")?
    } else {
        cipher.decrypt(&input).context("Decryption failed")?
    };

    if ctx.json_output {
        print_json(&CipherOutput {
            cipher: family,
            input: &input,
            output: &output,
        })
    } else {
        println!("{output}");
        Ok(())
    }
}
