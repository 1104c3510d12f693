//! # Corpus Partitioning
//!
//! Train/val/test partitioning of prepared sequences. One set of
//! [`SplitPoints`] is computed from the corpus length and shared by every
//! derived stream, so split files can never disagree on boundaries.

mod fractions;
mod split_writer;

#[doc(inline)]
pub use fractions::*;
#[doc(inline)]
pub use split_writer::*;
