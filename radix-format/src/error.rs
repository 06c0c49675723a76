use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::error_kind::ErrorKind;

/// This crate's error type.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns the [`ErrorKind`].
    ///
    /// [`ErrorKind`]: enum.ErrorKind.html
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

macro_rules! create_error_fn {
    ($fn_name:ident($($arg:ident: $ty:ty),*) => $variant:ident) => {
        pub(crate) fn $fn_name($($arg: $ty),*) -> Error {
            Error {
                kind: ErrorKind::$variant { $($arg),* },
            }
        }
    };
}

impl Error {
    create_error_fn!(alphabet_length(expected: usize, actual: usize) => AlphabetLength);
    create_error_fn!(capacity(len: usize, cap: usize) => Capacity);
    create_error_fn!(duplicate_digit(digit: char) => DuplicateDigit);
    create_error_fn!(invalid_radix(radix: u8) => InvalidRadix);
    create_error_fn!(non_ascii_digit(digit: char) => NonAsciiDigit);
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::*;

    impl std::error::Error for Error {}
}
