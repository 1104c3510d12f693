//! # Byte/Code Sequence Translation

use crate::{errors::BmResult, types::CodeType, vocab::ByteCodeVocab};

/// Translates between corpus bytes and vocabulary codes.
///
/// Encoding is a per-byte table lookup, so the output always has the same
/// length as the input. Decoding is its exact inverse over the vocabulary's
/// domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteCodeEncoder<T: CodeType> {
    vocab: ByteCodeVocab<T>,
}

impl<T: CodeType> ByteCodeEncoder<T> {
    /// Construct an encoder over a vocabulary.
    pub fn new(vocab: ByteCodeVocab<T>) -> Self {
        Self { vocab }
    }

    /// The vocabulary backing this encoder.
    pub fn vocab(&self) -> &ByteCodeVocab<T> {
        &self.vocab
    }

    /// Encode bytes into their vocabulary codes.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    ///
    /// ## Returns
    /// One code per input byte; `UnknownByte` for a byte the vocabulary
    /// does not cover.
    pub fn try_encode(
        &self,
        bytes: &[u8],
    ) -> BmResult<Vec<T>> {
        let mut codes = Vec::with_capacity(bytes.len());
        self.append_codes(bytes, &mut codes)?;
        Ok(codes)
    }

    /// Append the translated codes to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `codes` - The target code buffer.
    pub fn append_codes(
        &self,
        bytes: &[u8],
        codes: &mut Vec<T>,
    ) -> BmResult<()> {
        codes.reserve(bytes.len());
        for &byte in bytes {
            codes.push(self.vocab.try_code(byte)?);
        }
        Ok(())
    }

    /// Decode codes back into bytes.
    ///
    /// ## Arguments
    /// * `codes` - The codes to decode.
    ///
    /// ## Returns
    /// One byte per input code; `UnknownCode` for a code outside the
    /// vocabulary range.
    pub fn try_decode(
        &self,
        codes: &[T],
    ) -> BmResult<Vec<u8>> {
        codes.iter().map(|&code| self.vocab.try_byte(code)).collect()
    }
}
