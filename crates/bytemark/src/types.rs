//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a stored vocabulary code.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max code in a vocabulary is less than `T::max()`.
pub trait CodeType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> CodeType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_code_types() {
        struct IsCode<T: CodeType>(PhantomData<T>);

        let _: IsCode<u8>;
        let _: IsCode<u16>;
        let _: IsCode<u32>;
        let _: IsCode<u64>;
        let _: IsCode<usize>;
    }
}
