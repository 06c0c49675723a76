use core::fmt::Debug;
use core::ops::{Div, Mul, Rem, Sub};

/// An unsigned integer that can be written by a [`Printer`].
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
///
/// [`Printer`]: struct.Printer.html
pub trait Natural:
    Copy
    + Debug
    + Ord
    + Div<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + Sub<Output = Self>
    + crate::private::Sealed
{
    /// The value `0`.
    const ZERO: Self;

    /// The value `1`.
    const ONE: Self;

    /// Number of digits of `MAX` written in radix 2.
    const MAX_DIGITS: usize;

    /// Converts a radix (always below 256) into this type.
    fn from_radix(radix: u8) -> Self;

    /// Converts a small constant, returning `None` if it does not fit.
    fn try_from_u16(n: u16) -> Option<Self>;

    /// Multiplies, returning `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Converts a digit or digit-pair value into a table index.
    ///
    /// Only called with values below `MAX_RADIX²`, so truncation never occurs.
    fn as_index(self) -> usize;
}

macro_rules! impl_Natural {
    ($($t:ident),*) => {$(
        impl Natural for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX_DIGITS: usize = $t::BITS as usize;

            #[inline(always)]
            fn from_radix(radix: u8) -> Self {
                radix as $t
            }

            #[inline(always)]
            fn try_from_u16(n: u16) -> Option<Self> {
                <$t as core::convert::TryFrom<u16>>::try_from(n).ok()
            }

            #[inline(always)]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                $t::checked_mul(self, rhs)
            }

            #[inline(always)]
            fn as_index(self) -> usize {
                self as usize
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

impl_Natural!(u8, u16, u32, u64, u128, usize);
