//! # Error Types

/// Stages of the corpus preparation pipeline, used for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PipelineStage {
    /// Reading the input corpus.
    Read,

    /// Building the byte vocabulary.
    Vocab,

    /// Encoding the corpus into codes.
    Encode,

    /// Classifying word-boundary positions.
    Boundaries,

    /// Writing the split stream files.
    Splits,

    /// Writing the vocabulary meta record.
    Meta,
}

/// Errors from bytemark operations.
#[derive(Debug, thiserror::Error)]
pub enum BytemarkError {
    /// The input corpus contained no bytes.
    #[error("empty corpus")]
    EmptyCorpus,

    /// A byte with no assigned code was encountered.
    #[error("byte {byte:#04x} is not in the vocabulary")]
    UnknownByte {
        /// The unmapped byte value.
        byte: u8,
    },

    /// A code outside the vocabulary range was encountered.
    #[error("code {code} is out of range for vocab size {vocab_size}")]
    UnknownCode {
        /// The out-of-range code value.
        code: u64,

        /// The size of the vocabulary the code was checked against.
        vocab_size: usize,
    },

    /// Vocab size exceeds the capacity of the target code type.
    #[error("vocab size ({size}) exceeds code type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Split fractions are outside `0 <= train <= val <= 1`.
    #[error("invalid split fractions: train={train}, val={val}")]
    InvalidSplitFractions {
        /// The train fraction.
        train: f64,

        /// The val fraction.
        val: f64,
    },

    /// A pipeline stage failed.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// The stage that failed.
        stage: PipelineStage,

        /// The underlying failure.
        #[source]
        source: Box<BytemarkError>,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (JSON, stream framing, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl BytemarkError {
    /// Wrap an error with the pipeline stage it occurred in.
    pub fn at_stage(
        stage: PipelineStage,
        source: BytemarkError,
    ) -> BytemarkError {
        BytemarkError::Stage {
            stage,
            source: Box::new(source),
        }
    }
}

/// Result type for bytemark operations.
pub type BmResult<T> = core::result::Result<T, BytemarkError>;
