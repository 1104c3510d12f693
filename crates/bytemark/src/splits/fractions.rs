//! # Split Fractions and Points

use core::ops::Range;

use crate::errors::{BmResult, BytemarkError};

/// Default cumulative endpoint of the train split.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.90;

/// Default cumulative endpoint of the val split.
pub const DEFAULT_VAL_FRACTION: f64 = 0.95;

/// The three output partitions of a prepared corpus.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum Split {
    /// The training partition.
    Train,

    /// The validation partition.
    Val,

    /// The held-out test partition.
    Test,
}

impl Split {
    /// The file stem for this split's output files.
    pub fn stem(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    /// The filename of this split's code stream file.
    pub fn codes_filename(&self) -> String {
        format!("{}.bin", self.stem())
    }

    /// The filename of this split's word-boundary stream file.
    pub fn boundaries_filename(&self) -> String {
        format!("{}_word_boundaries.bin", self.stem())
    }
}

/// Cumulative split fractions over a corpus.
///
/// `train` and `val` are cumulative endpoints. The train split covers
/// `[0, train)` of the sequence and the val split `[train, val)`; test
/// takes the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFractions {
    /// Cumulative endpoint of the train split.
    pub train: f64,

    /// Cumulative endpoint of the val split.
    pub val: f64,
}

impl Default for SplitFractions {
    fn default() -> Self {
        Self {
            train: DEFAULT_TRAIN_FRACTION,
            val: DEFAULT_VAL_FRACTION,
        }
    }
}

impl SplitFractions {
    /// Construct validated split fractions.
    ///
    /// ## Arguments
    /// * `train` - The cumulative train endpoint.
    /// * `val` - The cumulative val endpoint.
    ///
    /// ## Returns
    /// The fractions, or `InvalidSplitFractions` unless
    /// `0 <= train <= val <= 1`.
    pub fn new(
        train: f64,
        val: f64,
    ) -> BmResult<Self> {
        if !(0.0..=1.0).contains(&train) || !(0.0..=1.0).contains(&val) || train > val {
            return Err(BytemarkError::InvalidSplitFractions { train, val });
        }
        Ok(Self { train, val })
    }

    /// Compute the split points for a sequence length.
    ///
    /// Points are `floor(len * fraction)`: float multiply, truncate. The
    /// points are computed once, from the original corpus length, and
    /// shared by every derived stream.
    pub fn split_points(
        &self,
        len: usize,
    ) -> SplitPoints {
        SplitPoints {
            train_end: (len as f64 * self.train) as usize,
            val_end: (len as f64 * self.val) as usize,
            len,
        }
    }
}

/// Concrete split boundaries over sequences of one fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoints {
    /// End (exclusive) of the train range.
    pub train_end: usize,

    /// End (exclusive) of the val range.
    pub val_end: usize,

    /// The full sequence length.
    pub len: usize,
}

impl SplitPoints {
    /// The `[0, train_end)` train range.
    pub fn train_range(&self) -> Range<usize> {
        0..self.train_end
    }

    /// The `[train_end, val_end)` val range.
    pub fn val_range(&self) -> Range<usize> {
        self.train_end..self.val_end
    }

    /// The `[val_end, len)` test range.
    pub fn test_range(&self) -> Range<usize> {
        self.val_end..self.len
    }

    /// The range of one split.
    ///
    /// The three ranges are disjoint and cover `0..len` exactly.
    pub fn split_range(
        &self,
        split: Split,
    ) -> Range<usize> {
        match split {
            Split::Train => self.train_range(),
            Split::Val => self.val_range(),
            Split::Test => self.test_range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_split_stems() {
        assert_eq!(Split::Train.stem(), "train");
        assert_eq!(Split::Val.stem(), "val");
        assert_eq!(Split::Test.stem(), "test");

        assert_eq!(Split::Train.codes_filename(), "train.bin");
        assert_eq!(
            Split::Val.boundaries_filename(),
            "val_word_boundaries.bin"
        );
    }

    #[test]
    fn test_default_split_points() {
        let points = SplitFractions::default().split_points(100);

        assert_eq!(points.train_end, 90);
        assert_eq!(points.val_end, 95);
        assert_eq!(points.train_range(), 0..90);
        assert_eq!(points.val_range(), 90..95);
        assert_eq!(points.test_range(), 95..100);
    }

    #[test]
    fn test_split_points_truncate() {
        // 10 * 0.95 = 9.5; the point truncates, leaving val empty.
        let points = SplitFractions::default().split_points(10);

        assert_eq!(points.train_end, 9);
        assert_eq!(points.val_end, 9);
        assert!(points.val_range().is_empty());
        assert_eq!(points.test_range(), 9..10);
    }

    #[test]
    fn test_split_points_single_element() {
        let points = SplitFractions::default().split_points(1);

        assert!(points.train_range().is_empty());
        assert!(points.val_range().is_empty());
        assert_eq!(points.test_range(), 0..1);
    }

    #[test]
    fn test_split_points_partition() {
        for len in [0, 1, 2, 3, 10, 99, 100, 101, 1000] {
            let points = SplitFractions::default().split_points(len);

            let total: usize = Split::iter()
                .map(|split| points.split_range(split).len())
                .sum();
            assert_eq!(total, len);

            assert_eq!(points.train_range().end, points.val_range().start);
            assert_eq!(points.val_range().end, points.test_range().start);
            assert_eq!(points.test_range().end, len);
        }
    }

    #[test]
    fn test_invalid_fractions() {
        assert!(SplitFractions::new(0.8, 0.9).is_ok());
        assert!(SplitFractions::new(0.0, 0.0).is_ok());
        assert!(SplitFractions::new(1.0, 1.0).is_ok());

        for (train, val) in [(0.9, 0.8), (-0.1, 0.5), (0.5, 1.1), (f64::NAN, 0.5)] {
            assert!(matches!(
                SplitFractions::new(train, val),
                Err(BytemarkError::InvalidSplitFractions { .. })
            ));
        }
    }
}
