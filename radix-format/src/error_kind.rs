use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RADIX, MIN_RADIX};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Alphabet length does not match the radix it is meant for.
    AlphabetLength {
        /// Number of digits the radix requires.
        expected: usize,
        /// Number of characters that were supplied.
        actual: usize,
    },

    /// Input or output exceeds a buffer's capacity.
    Capacity {
        /// Length of the input in bytes.
        len: usize,
        /// Capacity of the buffer in bytes.
        cap: usize,
    },

    /// The same character appears twice in an alphabet.
    DuplicateDigit {
        /// The repeated character.
        digit: char,
    },

    /// Radix outside of 2 ..= 36.
    InvalidRadix {
        /// The rejected radix.
        radix: u8,
    },

    /// Alphabet contains a character that is not ASCII.
    NonAsciiDigit {
        /// The rejected character.
        digit: char,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            AlphabetLength { expected, actual } => write!(
                f,
                "Alphabet has {} characters, but the radix requires exactly {}.",
                actual, expected
            ),
            Capacity { len, cap } => write!(
                f,
                "Attempted to write input of length {} bytes into a buffer with \
                 capacity {} bytes.",
                len, cap
            ),
            DuplicateDigit { digit } => {
                write!(f, "Character {:?} appears more than once in the alphabet.", digit)
            }
            InvalidRadix { radix } => write!(
                f,
                "Radix {} is not supported; it must be between {} and {}.",
                radix, MIN_RADIX, MAX_RADIX
            ),
            NonAsciiDigit { digit } => {
                write!(f, "Character {:?} is not ASCII; alphabets must be ASCII.", digit)
            }
        }
    }
}
