//! # Word-Boundary Marking
//!
//! Per-position classification of an encoded corpus: a position is marked
//! when its byte begins a UTF-8 character at the start of a word-like run.
//! The markers form a stream parallel to the code stream, one flag per
//! position.

mod byte_class;
mod classifier;

#[doc(inline)]
pub use byte_class::*;
#[doc(inline)]
pub use classifier::*;
