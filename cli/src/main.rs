use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "classical")]
#[command(about = "Classical ciphers over Z_26 with known-plaintext key recovery")]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key file
    Encrypt(commands::cipher::CipherArgs),
    /// Decrypt text with a key file
    Decrypt(commands::cipher::CipherArgs),
    /// Recover a Hill or affine-Hill key from a known plaintext/ciphertext pair
    FindKey(commands::find_key::FindKeyArgs),
    /// Generate a random invertible key
    GenKey(commands::gen_key::GenKeyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr; RUST_LOG wins over the -v default.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let ctx = commands::Context {
        json_output: cli.json,
    };

    match cli.command {
        Commands::Encrypt(args) => commands::cipher::encrypt(args, &ctx),
        Commands::Decrypt(args) => commands::cipher::decrypt(args, &ctx),
        Commands::FindKey(args) => commands::find_key::run(args, &ctx),
        Commands::GenKey(args) => commands::gen_key::run(args, &ctx),
    }
}
