//! # Corpus Preparation Pipeline
//!
//! The end-to-end driver: read the corpus once, derive every stream in
//! memory, then write the output files. Single-threaded, one pass per
//! stage. Identical input bytes produce byte-identical outputs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    boundary::BoundaryClassifier,
    encoding::ByteCodeEncoder,
    errors::{BmResult, BytemarkError, PipelineStage},
    splits::{SplitFractions, SplitWriter},
    stream_io::CodeBytes,
    vocab::{
        ByteCodeVocab,
        io::{META_FILENAME, VocabMeta, save_vocab_meta_path},
    },
};

/// Options for a corpus preparation run.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// The input corpus path.
    pub input_path: PathBuf,

    /// The directory receiving the output files.
    pub output_dir: PathBuf,

    /// The split fractions.
    pub fractions: SplitFractions,
}

impl PrepareOptions {
    /// Construct options with default split fractions.
    ///
    /// ## Arguments
    /// * `input_path` - The input corpus path.
    /// * `output_dir` - The directory receiving the output files.
    pub fn new(
        input_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            fractions: SplitFractions::default(),
        }
    }

    /// Override the split fractions.
    pub fn with_fractions(
        mut self,
        fractions: SplitFractions,
    ) -> Self {
        self.fractions = fractions;
        self
    }
}

/// Size summary of a finished preparation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareSummary {
    /// The corpus length in bytes.
    pub corpus_len: usize,

    /// The vocabulary size.
    pub vocab_size: usize,

    /// The train split length.
    pub train_len: usize,

    /// The val split length.
    pub val_len: usize,

    /// The test split length.
    pub test_len: usize,
}

/// Run the full preparation over a corpus file.
///
/// Stages: read the corpus, build the vocabulary, encode, classify word
/// boundaries, then write the six split stream files and the meta record.
/// Every error carries the stage it occurred in.
///
/// ## Arguments
/// * `options` - The run options.
///
/// ## Returns
/// A [`PrepareSummary`], or the first stage error.
pub fn run_prepare<T: CodeBytes>(options: &PrepareOptions) -> BmResult<PrepareSummary> {
    let corpus = fs::read(&options.input_path)
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Read, e.into()))?;
    log::info!("corpus length: {} bytes", corpus.len());

    let vocab = ByteCodeVocab::<T>::from_corpus(&corpus)
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Vocab, e))?;
    log::info!("vocab size: {} distinct bytes", vocab.vocab_size());
    log::debug!(
        "distinct bytes: {:?}",
        String::from_utf8_lossy(vocab.code_bytes())
    );

    let encoder = ByteCodeEncoder::new(vocab.clone());
    let codes = encoder
        .try_encode(&corpus)
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Encode, e))?;

    let flags = BoundaryClassifier::new(&vocab)
        .classify(&codes)
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Boundaries, e))?;

    let points = options.fractions.split_points(corpus.len());
    log::info!(
        "split sizes: train {} / val {} / test {}",
        points.train_range().len(),
        points.val_range().len(),
        points.test_range().len(),
    );

    fs::create_dir_all(&options.output_dir)
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Splits, e.into()))?;

    let writer = SplitWriter::new(&options.output_dir, points);
    writer
        .write_code_splits(&codes)
        .and_then(|_| writer.write_boundary_splits(&flags))
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Splits, e))?;

    let meta = VocabMeta::from_vocab(&vocab);
    save_vocab_meta_path(&meta, options.output_dir.join(META_FILENAME))
        .map_err(|e| BytemarkError::at_stage(PipelineStage::Meta, e))?;
    log::info!("meta record: {} entries", meta.byte_codes.len());

    Ok(PrepareSummary {
        corpus_len: corpus.len(),
        vocab_size: vocab.vocab_size(),
        train_len: points.train_range().len(),
        val_len: points.val_range().len(),
        test_len: points.test_range().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_prepare() {
        let dir = tempdir::TempDir::new("pipeline_test").unwrap();
        let input_path = dir.path().join("input.txt");
        let out_dir = dir.path().join("out");

        fs::write(&input_path, "Hi, world.".repeat(10)).unwrap();

        let options = PrepareOptions::new(&input_path, &out_dir);
        let summary = run_prepare::<u16>(&options).unwrap();

        assert_eq!(summary.corpus_len, 100);
        assert_eq!(summary.vocab_size, 10);
        assert_eq!(summary.train_len, 90);
        assert_eq!(summary.val_len, 5);
        assert_eq!(summary.test_len, 5);

        for name in [
            "train.bin",
            "val.bin",
            "test.bin",
            "train_word_boundaries.bin",
            "val_word_boundaries.bin",
            "test_word_boundaries.bin",
            META_FILENAME,
        ] {
            assert!(out_dir.join(name).exists(), "missing {name}");
        }
    }

    #[test]
    fn test_run_prepare_missing_input() {
        let dir = tempdir::TempDir::new("pipeline_test").unwrap();

        let options = PrepareOptions::new(dir.path().join("absent.txt"), dir.path());
        let err = run_prepare::<u16>(&options).unwrap_err();

        assert!(matches!(
            err,
            BytemarkError::Stage {
                stage: PipelineStage::Read,
                ..
            }
        ));
    }

    #[test]
    fn test_run_prepare_empty_corpus() {
        let dir = tempdir::TempDir::new("pipeline_test").unwrap();
        let input_path = dir.path().join("empty.txt");

        fs::write(&input_path, "").unwrap();

        let options = PrepareOptions::new(&input_path, dir.path().join("out"));
        let err = run_prepare::<u16>(&options).unwrap_err();

        match err {
            BytemarkError::Stage { stage, source } => {
                assert_eq!(stage, PipelineStage::Vocab);
                assert!(matches!(*source, BytemarkError::EmptyCorpus));
            }
            _ => panic!("expected stage error"),
        }

        // Nothing was written under the output directory.
        assert!(!dir.path().join("out").exists());
    }
}
