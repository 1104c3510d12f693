use bytemark::{
    encoding::ByteCodeEncoder,
    stream_io::{CodeBytes, code_stream_bytes, read_code_stream},
    vocab::io::{VocabMeta, load_vocab_meta_path},
};

use crate::{
    code_width::{CodeWidth, CodeWidthArgs},
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// The codec direction.
#[derive(Debug, Clone, Copy)]
pub enum CodecMode {
    /// Encode from corpus bytes to a code stream.
    Encode,

    /// Decode from a code stream to corpus bytes.
    Decode,
}

/// Codec direction argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CodecModeArgs {
    /// Encode from corpus bytes to a code stream.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from a code stream to corpus bytes.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl CodecModeArgs {
    /// Get the codec direction.
    pub fn mode(&self) -> CodecMode {
        if self.encode {
            CodecMode::Encode
        } else if self.decode {
            CodecMode::Decode
        } else {
            panic!("No codec direction specified.");
        }
    }
}

/// Args for the codec command.
#[derive(clap::Args, Debug)]
pub struct CodecArgs {
    /// Meta record file holding the vocabulary.
    #[arg(long)]
    meta: String,

    #[command(flatten)]
    mode: CodecModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    code_width: CodeWidthArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl CodecArgs {
    /// Run the codec command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let meta = load_vocab_meta_path(&self.meta)?;
        let data = self.input.read_bytes()?;

        let out = match self.code_width.width()? {
            CodeWidth::One => run_codec::<u8>(&meta, self.mode.mode(), &data)?,
            CodeWidth::Two => run_codec::<u16>(&meta, self.mode.mode(), &data)?,
        };

        self.output.write_bytes(&out)
    }
}

fn run_codec<T: CodeBytes>(
    meta: &VocabMeta,
    mode: CodecMode,
    data: &[u8],
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = ByteCodeEncoder::new(meta.to_vocab::<T>()?);

    Ok(match mode {
        CodecMode::Encode => code_stream_bytes(&encoder.try_encode(data)?),
        CodecMode::Decode => encoder.try_decode(&read_code_stream::<T>(data)?)?,
    })
}
