//! # Byte/Code Mapping Table

use core::fmt::Debug;

use crate::{
    errors::{BmResult, BytemarkError},
    types::CodeType,
};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Validates and returns the vocabulary size, ensuring the max code fits the code type.
pub fn try_vocab_size<T: CodeType>(vocab_size: usize) -> BmResult<usize> {
    if vocab_size == 0 {
        Err(BytemarkError::EmptyCorpus)
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(BytemarkError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Dense Byte/Code Bijection Table
///
/// Maps the distinct byte values of a corpus onto the contiguous code range
/// `0..vocab_size`, assigning codes in ascending byte order. Bytes absent
/// from the source corpus carry no code, so the same table can reject
/// out-of-vocabulary data later.
#[derive(Clone, PartialEq)]
pub struct ByteCodeVocab<T: CodeType> {
    /// Table mapping from code rank (position) to byte value, ascending.
    code_bytes: Vec<u8>,

    /// Table mapping from byte ordinal (position) to code.
    byte_codes: [Option<T>; U8_SIZE],
}

impl<T: CodeType> Debug for ByteCodeVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteCodeVocab")
            .field("vocab_size", &self.vocab_size())
            .field("code_bytes", &self.code_bytes)
            .finish()
    }
}

impl<T: CodeType> ByteCodeVocab<T> {
    /// Build a vocabulary from the distinct bytes of a corpus.
    ///
    /// The assignment is deterministic: the `i`-th smallest distinct byte
    /// value receives code `i`.
    ///
    /// ## Arguments
    /// * `corpus` - The corpus bytes to scan.
    ///
    /// ## Returns
    /// A new `ByteCodeVocab`, or `EmptyCorpus` for zero-length input.
    pub fn from_corpus(corpus: &[u8]) -> BmResult<Self> {
        if corpus.is_empty() {
            return Err(BytemarkError::EmptyCorpus);
        }

        let mut seen = [false; U8_SIZE];
        for &b in corpus {
            seen[b as usize] = true;
        }

        let code_bytes = (0..U8_SIZE)
            .filter(|&b| seen[b])
            .map(|b| b as u8)
            .collect::<Vec<_>>();

        Self::from_code_bytes(code_bytes)
    }

    /// Build a vocabulary from a stored code => byte table.
    ///
    /// ## Arguments
    /// * `code_bytes` - The byte for each code, indexed by code rank.
    ///
    /// ## Returns
    /// A new `ByteCodeVocab`, or `VocabConflict` unless the table is
    /// strictly ascending (the only shape [`Self::from_corpus`] produces).
    pub fn from_code_bytes(code_bytes: Vec<u8>) -> BmResult<Self> {
        try_vocab_size::<T>(code_bytes.len())?;

        let mut byte_codes: [Option<T>; U8_SIZE] = [None; U8_SIZE];
        for (code, &byte) in code_bytes.iter().enumerate() {
            if code > 0 && code_bytes[code - 1] >= byte {
                return Err(BytemarkError::VocabConflict(format!(
                    "byte {byte:#04x} at code {code} breaks ascending order"
                )));
            }
            // Infallible: try_vocab_size bounds every code rank.
            byte_codes[byte as usize] = T::from_usize(code);
        }

        Ok(Self {
            code_bytes,
            byte_codes,
        })
    }

    /// The number of distinct bytes in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.code_bytes.len()
    }

    /// Get the code => byte table, ascending by byte value.
    pub fn code_bytes(&self) -> &[u8] {
        &self.code_bytes
    }

    /// Get the code assigned to a byte, if any.
    ///
    /// ## Arguments
    /// * `byte` - The byte value to look up.
    #[inline(always)]
    pub fn get_code(
        &self,
        byte: u8,
    ) -> Option<T> {
        self.byte_codes[byte as usize]
    }

    /// Get the code assigned to a byte, or an `UnknownByte` error.
    ///
    /// ## Arguments
    /// * `byte` - The byte value to look up.
    pub fn try_code(
        &self,
        byte: u8,
    ) -> BmResult<T> {
        self.get_code(byte)
            .ok_or(BytemarkError::UnknownByte { byte })
    }

    /// Get the byte a code maps to, if in range.
    ///
    /// ## Arguments
    /// * `code` - The code to look up.
    #[inline(always)]
    pub fn get_byte(
        &self,
        code: T,
    ) -> Option<u8> {
        code.to_usize()
            .and_then(|c| self.code_bytes.get(c).copied())
    }

    /// Get the byte a code maps to, or an `UnknownCode` error.
    ///
    /// ## Arguments
    /// * `code` - The code to look up.
    pub fn try_byte(
        &self,
        code: T,
    ) -> BmResult<u8> {
        self.get_byte(code)
            .ok_or_else(|| BytemarkError::UnknownCode {
                code: code.to_u64().unwrap_or(u64::MAX),
                vocab_size: self.vocab_size(),
            })
    }

    /// Iterate the `(byte, code)` pairs in ascending byte order.
    pub fn byte_code_pairs(&self) -> impl Iterator<Item = (u8, T)> + '_ {
        self.code_bytes
            .iter()
            .enumerate()
            .map(|(code, &byte)| (byte, T::from_usize(code).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_from_corpus() {
        type T = u32;

        let vocab = ByteCodeVocab::<T>::from_corpus(b"hello world").unwrap();

        // Distinct bytes, ascending: " dehlorw"
        assert_eq!(vocab.vocab_size(), 8);
        assert_eq!(vocab.code_bytes(), b" dehlorw");

        for (code, &byte) in vocab.code_bytes().iter().enumerate() {
            assert_eq!(vocab.get_code(byte), Some(code as T));
            assert_eq!(vocab.get_byte(code as T), Some(byte));
        }

        assert_eq!(vocab.get_code(b'z'), None);
        assert_eq!(vocab.get_byte(8), None);

        let pairs: Vec<(u8, T)> = vocab.byte_code_pairs().collect();
        assert_eq!(pairs.first(), Some(&(b' ', 0)));
        assert_eq!(pairs.last(), Some(&(b'w', 7)));

        assert_eq!(
            format!("{:?}", vocab),
            format!(
                "ByteCodeVocab {{ vocab_size: 8, code_bytes: {:?} }}",
                vocab.code_bytes()
            )
        );
    }

    #[test]
    fn test_vocab_determinism() {
        type T = u16;

        let a = ByteCodeVocab::<T>::from_corpus(b"abacus").unwrap();
        let b = ByteCodeVocab::<T>::from_corpus(b"abacus").unwrap();
        assert_eq!(a, b);

        let rebuild = ByteCodeVocab::<T>::from_code_bytes(a.code_bytes().to_vec()).unwrap();
        assert_eq!(rebuild, a);
    }

    #[test]
    fn test_vocab_empty_corpus() {
        type T = u16;

        assert!(matches!(
            ByteCodeVocab::<T>::from_corpus(b""),
            Err(BytemarkError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_vocab_conflicts() {
        type T = u16;

        assert!(matches!(
            ByteCodeVocab::<T>::from_code_bytes(vec![b'b', b'a']),
            Err(BytemarkError::VocabConflict(_))
        ));

        assert!(matches!(
            ByteCodeVocab::<T>::from_code_bytes(vec![b'a', b'a']),
            Err(BytemarkError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_vocab_errors() {
        type T = u16;

        let vocab = ByteCodeVocab::<T>::from_corpus(b"ab").unwrap();

        assert!(matches!(
            vocab.try_code(b'z'),
            Err(BytemarkError::UnknownByte { byte: b'z' })
        ));

        assert!(matches!(
            vocab.try_byte(2),
            Err(BytemarkError::UnknownCode {
                code: 2,
                vocab_size: 2,
            })
        ));
    }

    #[test]
    fn test_try_vocab_size() {
        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert_eq!(try_vocab_size::<u16>(256).unwrap(), 256);

        assert!(matches!(
            try_vocab_size::<u8>(257),
            Err(BytemarkError::VocabSizeOverflow { size: 257 })
        ));

        assert!(matches!(
            try_vocab_size::<u16>(0),
            Err(BytemarkError::EmptyCorpus)
        ));
    }
}
