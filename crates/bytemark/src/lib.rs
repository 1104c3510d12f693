//! # `bytemark` Byte-Level Corpus Preparation
//!
//! `bytemark` turns a raw UTF-8 corpus into the flat binary artifacts a
//! character-level language model trains on: a dense byte vocabulary, a
//! fixed-width code stream, a parallel word-boundary marker stream, and
//! train/val/test splits of both.
//!
//! See:
//! * [`vocab`] to build and persist byte vocabularies.
//! * [`encoding`] to translate between corpus bytes and codes.
//! * [`boundary`] to classify word-start positions.
//! * [`splits`] to partition sequences and write the split files.
//! * [`pipeline`] to run the whole preparation end to end.
//!
//! ## Preparing a Corpus
//!
//! ```rust,no_run
//! use bytemark::pipeline::{PrepareOptions, run_prepare};
//!
//! fn example() -> bytemark::errors::BmResult<()> {
//!     let options = PrepareOptions::new("input.txt", "out/");
//!     let summary = run_prepare::<u16>(&options)?;
//!     println!("vocab size: {}", summary.vocab_size);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod boundary;
pub mod encoding;
pub mod errors;
pub mod pipeline;
pub mod splits;
pub mod stream_io;
pub mod types;
pub mod vocab;
