//! # Corpus Encoding
//!
//! Translation between raw corpus bytes and dense vocabulary codes.

mod byte_encoder;

#[doc(inline)]
pub use byte_encoder::*;
