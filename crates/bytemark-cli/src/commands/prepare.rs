use bytemark::{
    pipeline::{PrepareOptions, run_prepare},
    splits::{DEFAULT_TRAIN_FRACTION, DEFAULT_VAL_FRACTION, SplitFractions},
};

use crate::{
    code_width::{CodeWidth, CodeWidthArgs},
    logging::LogArgs,
};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    /// Input corpus file.
    #[arg(long)]
    input: String,

    /// Output directory for the stream files and meta record.
    #[arg(long)]
    out_dir: String,

    /// Cumulative train fraction.
    #[arg(long, default_value_t = DEFAULT_TRAIN_FRACTION)]
    train_frac: f64,

    /// Cumulative val fraction.
    #[arg(long, default_value_t = DEFAULT_VAL_FRACTION)]
    val_frac: f64,

    #[command(flatten)]
    code_width: CodeWidthArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl PrepareArgs {
    /// Run the prepare command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let fractions = SplitFractions::new(self.train_frac, self.val_frac)?;
        let options = PrepareOptions::new(&self.input, &self.out_dir).with_fractions(fractions);

        log::info!("preparing {} into {}", self.input, self.out_dir);
        let summary = match self.code_width.width()? {
            CodeWidth::One => run_prepare::<u8>(&options)?,
            CodeWidth::Two => run_prepare::<u16>(&options)?,
        };

        log::info!(
            "prepared {} codes ({} train / {} val / {} test)",
            summary.corpus_len,
            summary.train_len,
            summary.val_len,
            summary.test_len,
        );

        Ok(())
    }
}
