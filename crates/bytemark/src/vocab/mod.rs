//! # Vocabulary Construction and Persistence
//!
//! A [`ByteCodeVocab`] maps the distinct byte values observed in a corpus
//! onto the dense code range `0..vocab_size`, in ascending byte order.
//!
//! See [`io`] for the on-disk meta record.

pub mod io;

mod byte_vocab;

#[doc(inline)]
pub use byte_vocab::*;
