//! # Word-Boundary Classification

use crate::{
    boundary::{is_lead_byte, is_space_or_punct},
    errors::BmResult,
    types::CodeType,
    vocab::ByteCodeVocab,
};

/// The previous-byte seed for position zero.
///
/// Treating the byte before the corpus as a space makes a word-initial
/// first position eligible for a mark.
pub const LEADING_SENTINEL: u8 = b' ';

/// Marks word-start positions over an encoded sequence.
///
/// A position is marked `1` when its byte begins a UTF-8 character and
/// either it or its predecessor is in the space/punctuation set. The scan
/// is a single left-to-right pass carrying only the previous byte.
#[derive(Debug, Clone)]
pub struct BoundaryClassifier<'a, T: CodeType> {
    vocab: &'a ByteCodeVocab<T>,
}

impl<'a, T: CodeType> BoundaryClassifier<'a, T> {
    /// Construct a classifier over a vocabulary.
    pub fn new(vocab: &'a ByteCodeVocab<T>) -> Self {
        Self { vocab }
    }

    /// Classify every position of an encoded sequence.
    ///
    /// ## Arguments
    /// * `codes` - The encoded sequence to classify.
    ///
    /// ## Returns
    /// One `0`/`1` flag per position; `UnknownCode` for a code outside the
    /// vocabulary range.
    pub fn classify(
        &self,
        codes: &[T],
    ) -> BmResult<Vec<u8>> {
        let mut flags = Vec::with_capacity(codes.len());

        let mut prev = LEADING_SENTINEL;
        for &code in codes {
            let curr = self.vocab.try_byte(code)?;

            let mark = is_lead_byte(curr) && (is_space_or_punct(curr) || is_space_or_punct(prev));
            flags.push(mark as u8);

            prev = curr;
        }

        Ok(flags)
    }
}
