use bytemark::vocab::io::load_vocab_meta_path;

use crate::logging::LogArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Meta record file to print.
    #[arg(long)]
    meta: String,

    #[clap(flatten)]
    logging: LogArgs,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let meta = load_vocab_meta_path(&self.meta)?;

        println!("vocab size: {}", meta.vocab_size);
        for &(byte, code) in &meta.byte_codes {
            let c = char::from(byte);
            if c.is_ascii_graphic() || c == ' ' {
                println!("  {code:>3} <- {byte:#04x} {c:?}");
            } else {
                println!("  {code:>3} <- {byte:#04x}");
            }
        }

        Ok(())
    }
}
