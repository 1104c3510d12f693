//! # Vocabulary Meta Record IO

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{BmResult, BytemarkError},
    stream_io::write_bytes_atomic,
    types::CodeType,
    vocab::ByteCodeVocab,
};

/// The default filename of the vocabulary meta record.
pub const META_FILENAME: &str = "meta.json";

/// On-disk vocabulary record.
///
/// The ordered `(byte, code)` pairs carry both mapping directions in one
/// structure; loaders rebuild the dense tables from the pair list alone
/// and reject records a corpus scan could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabMeta {
    /// The number of distinct codes.
    pub vocab_size: usize,

    /// The `(byte, code)` pairs, ascending by byte value.
    pub byte_codes: Vec<(u8, u32)>,
}

impl VocabMeta {
    /// Build the record for a vocabulary.
    pub fn from_vocab<T: CodeType>(vocab: &ByteCodeVocab<T>) -> Self {
        Self {
            vocab_size: vocab.vocab_size(),
            byte_codes: vocab
                .byte_code_pairs()
                .map(|(byte, code)| (byte, code.to_u32().unwrap()))
                .collect(),
        }
    }

    /// Rebuild a vocabulary from the record.
    ///
    /// ## Returns
    /// The vocabulary, or `VocabConflict` when the size or pairs are
    /// inconsistent with a corpus-derived table.
    pub fn to_vocab<T: CodeType>(&self) -> BmResult<ByteCodeVocab<T>> {
        if self.byte_codes.len() != self.vocab_size {
            return Err(BytemarkError::VocabConflict(format!(
                "vocab_size {} does not match {} stored pairs",
                self.vocab_size,
                self.byte_codes.len()
            )));
        }

        for (rank, &(_, code)) in self.byte_codes.iter().enumerate() {
            if code as usize != rank {
                return Err(BytemarkError::VocabConflict(format!(
                    "stored code {code} at rank {rank} is not dense"
                )));
            }
        }

        let code_bytes = self.byte_codes.iter().map(|&(byte, _)| byte).collect();
        ByteCodeVocab::from_code_bytes(code_bytes)
    }
}

/// Write a [`VocabMeta`] record to a [`Write`] writer as pretty JSON.
///
/// ## Arguments
/// * `meta` - the record to write.
/// * `writer` - the target writer.
pub fn write_vocab_meta<W: Write>(
    meta: &VocabMeta,
    writer: &mut W,
) -> BmResult<()> {
    serde_json::to_writer_pretty(writer, meta).map_err(|e| BytemarkError::Parse(e.to_string()))
}

/// Read a [`VocabMeta`] record from a [`BufRead`] stream.
///
/// ## Arguments
/// * `reader` - the JSON reader.
pub fn read_vocab_meta<R: BufRead>(reader: R) -> BmResult<VocabMeta> {
    serde_json::from_reader(reader).map_err(|e| BytemarkError::Parse(e.to_string()))
}

/// Save a [`VocabMeta`] record to a path, through a temporary sibling.
///
/// ## Arguments
/// * `meta` - the record to save.
/// * `path` - the path to save the record to.
pub fn save_vocab_meta_path(
    meta: &VocabMeta,
    path: impl AsRef<Path>,
) -> BmResult<()> {
    let mut bytes = Vec::new();
    write_vocab_meta(meta, &mut bytes)?;

    write_bytes_atomic(path, &bytes)
}

/// Load a [`VocabMeta`] record from a path.
///
/// ## Arguments
/// * `path` - the path to load the record from.
pub fn load_vocab_meta_path(path: impl AsRef<Path>) -> BmResult<VocabMeta> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    read_vocab_meta(reader)
}
