use crate::commands::{codec::CodecArgs, inspect::InspectArgs, prepare::PrepareArgs};

pub mod codec;
pub mod inspect;
pub mod prepare;

/// Subcommands for bytemark-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Prepare a corpus into binary training streams.
    Prepare(PrepareArgs),

    /// Print a stored vocabulary meta record.
    Inspect(InspectArgs),

    /// Encode or decode data with a stored vocabulary.
    Codec(CodecArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Codec(cmd) => cmd.run(),
        }
    }
}
