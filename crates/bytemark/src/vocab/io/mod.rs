//! # Vocabulary IO
//!
//! The on-disk meta record for a prepared corpus: the vocabulary size and
//! the ordered `(byte, code)` pairs, as a single JSON document. A stored
//! record is enough to rebuild the full vocabulary with no corpus present.

mod meta_io;

#[doc(inline)]
pub use meta_io::*;
