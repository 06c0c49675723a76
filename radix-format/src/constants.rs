/// Smallest radix a [`Printer`] accepts.
///
/// [`Printer`]: struct.Printer.html
pub const MIN_RADIX: u8 = 2;

/// Largest radix a [`Printer`] accepts: ten numerals plus twenty-six letters.
///
/// [`Printer`]: struct.Printer.html
pub const MAX_RADIX: u8 = 10 + 26;

/// Digits used when no custom alphabet is supplied, truncated to the radix.
pub(crate) const DEFAULT_DIGITS: &[u8; MAX_RADIX as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// Number of entries in the digit-pair table for MAX_RADIX.
pub(crate) const MAX_PAIRS: usize = MAX_RADIX as usize * MAX_RADIX as usize;

// Want this to be as large as the longest digit string of any type that
// implements Natural, which is u128 written in radix 2.
pub(crate) const U128_MAX_DIGITS: usize = 128;

// Powers 2^0 ..= 2^127 are the most any Natural can hold.
pub(crate) const MAX_POWERS: usize = U128_MAX_DIGITS;

// The longest digit string plus one byte for the NUL terminator.
pub(crate) const MAX_BUF_LEN: usize = U128_MAX_DIGITS + 1;
