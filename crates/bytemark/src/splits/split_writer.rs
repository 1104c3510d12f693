//! # Split Stream Writer

use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::{
    errors::BmResult,
    splits::{Split, SplitPoints},
    stream_io::{CodeBytes, code_stream_bytes, write_bytes_atomic},
};

/// Writes aligned split files for the prepared streams.
///
/// All streams of one preparation share a single set of split points, so
/// the code and boundary files of a split always cover the same corpus
/// positions. Every file goes through temp-and-rename finalization.
#[derive(Debug, Clone)]
pub struct SplitWriter {
    output_dir: PathBuf,
    points: SplitPoints,
}

impl SplitWriter {
    /// Construct a writer over an output directory and fixed split points.
    ///
    /// ## Arguments
    /// * `output_dir` - The directory receiving the split files.
    /// * `points` - The shared split points.
    pub fn new(
        output_dir: impl AsRef<Path>,
        points: SplitPoints,
    ) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            points,
        }
    }

    /// The split points shared by every stream this writer emits.
    pub fn points(&self) -> &SplitPoints {
        &self.points
    }

    /// The output path of one split's code stream file.
    pub fn codes_path(
        &self,
        split: Split,
    ) -> PathBuf {
        self.output_dir.join(split.codes_filename())
    }

    /// The output path of one split's word-boundary stream file.
    pub fn boundaries_path(
        &self,
        split: Split,
    ) -> PathBuf {
        self.output_dir.join(split.boundaries_filename())
    }

    /// Write the three code stream files (`train.bin`, `val.bin`, `test.bin`).
    ///
    /// ## Arguments
    /// * `codes` - The full encoded sequence, one code per corpus position.
    pub fn write_code_splits<T: CodeBytes>(
        &self,
        codes: &[T],
    ) -> BmResult<()> {
        debug_assert_eq!(codes.len(), self.points.len);

        for split in Split::iter() {
            let slice = &codes[self.points.split_range(split)];
            let path = self.codes_path(split);

            log::debug!("writing {} codes to {}", slice.len(), path.display());
            write_bytes_atomic(&path, &code_stream_bytes(slice))?;
        }
        Ok(())
    }

    /// Write the three boundary stream files (`*_word_boundaries.bin`).
    ///
    /// ## Arguments
    /// * `flags` - The full boundary sequence, one `0`/`1` byte per corpus position.
    pub fn write_boundary_splits(
        &self,
        flags: &[u8],
    ) -> BmResult<()> {
        debug_assert_eq!(flags.len(), self.points.len);

        for split in Split::iter() {
            let slice = &flags[self.points.split_range(split)];
            let path = self.boundaries_path(split);

            log::debug!("writing {} flags to {}", slice.len(), path.display());
            write_bytes_atomic(&path, slice)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{splits::SplitFractions, stream_io::read_code_stream};

    #[test]
    fn test_write_code_splits() {
        let dir = tempdir::TempDir::new("split_writer_test").unwrap();

        let codes: Vec<u16> = (0..20).collect();
        let points = SplitFractions::default().split_points(codes.len());
        let writer = SplitWriter::new(dir.path(), points);

        writer.write_code_splits(&codes).unwrap();

        let mut recombined = Vec::new();
        for split in Split::iter() {
            let bytes = fs::read(writer.codes_path(split)).unwrap();
            let slice: Vec<u16> = read_code_stream(&bytes).unwrap();

            assert_eq!(slice.len(), writer.points().split_range(split).len());
            recombined.extend(slice);
        }

        // The splits are disjoint and recombine to the input.
        assert_eq!(recombined, codes);
    }

    #[test]
    fn test_write_boundary_splits() {
        let dir = tempdir::TempDir::new("split_writer_test").unwrap();

        let flags: Vec<u8> = (0..20).map(|i| (i % 3 == 0) as u8).collect();
        let points = SplitFractions::default().split_points(flags.len());
        let writer = SplitWriter::new(dir.path(), points);

        writer.write_boundary_splits(&flags).unwrap();

        assert_eq!(
            fs::read(writer.boundaries_path(Split::Train)).unwrap(),
            &flags[0..18]
        );
        assert_eq!(
            fs::read(writer.boundaries_path(Split::Val)).unwrap(),
            &flags[18..19]
        );
        assert_eq!(
            fs::read(writer.boundaries_path(Split::Test)).unwrap(),
            &flags[19..20]
        );
    }

    #[test]
    fn test_write_empty_splits() {
        let dir = tempdir::TempDir::new("split_writer_test").unwrap();

        // A single element leaves train and val empty.
        let codes: Vec<u16> = vec![7];
        let points = SplitFractions::default().split_points(codes.len());
        let writer = SplitWriter::new(dir.path(), points);

        writer.write_code_splits(&codes).unwrap();

        assert_eq!(fs::read(writer.codes_path(Split::Train)).unwrap(), b"");
        assert_eq!(fs::read(writer.codes_path(Split::Val)).unwrap(), b"");
        assert_eq!(
            fs::read(writer.codes_path(Split::Test)).unwrap(),
            &7u16.to_ne_bytes()
        );
    }
}
