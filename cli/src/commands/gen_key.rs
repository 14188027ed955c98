use anyhow::{Context as AnyhowContext, Result};
use clap::Args;
use classical_crypto::CipherKey;
use classical_crypto::cipher::hill::{self, DEFAULT_PADDING};
use classical_crypto::cipher::AffineHillKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Context, Family};
use crate::output::emit_key;

#[derive(Args)]
pub struct GenKeyArgs {
    /// Cipher family
    #[arg(long, value_enum)]
    pub family: Family,

    /// Block size of the key matrix
    #[arg(long, default_value_t = 3)]
    pub dim: usize,

    /// Seed for reproducible keys
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the key as a JSON key file
    #[arg(long)]
    pub out: Option<String>,
}

pub fn generate<R: Rng>(family: Family, dim: usize, rng: &mut R) -> Result<CipherKey> {
    let key = match family {
        Family::Hill => CipherKey::Hill {
            matrix: hill::random_key(dim, rng)?,
            padding: DEFAULT_PADDING,
        },
        Family::AffineHill => AffineHillKey::random(dim, rng)?.into(),
    };
    Ok(key)
}

pub fn run(args: GenKeyArgs, ctx: &Context) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let key = generate(args.family, args.dim, &mut rng)
        .with_context(|| format!("Failed to generate a {0}x{0} key", args.dim))?;
    emit_key(&key, args.out.as_deref(), ctx.json_output)
}
