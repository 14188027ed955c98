pub mod cipher;
pub mod find_key;
pub mod gen_key;

use clap::ValueEnum;

/// Global context passed to all commands
pub struct Context {
    pub json_output: bool,
}

/// Block cipher families that support key recovery and key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    Hill,
    AffineHill,
}
