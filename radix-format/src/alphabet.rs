use core::fmt;
use core::str;

use arrayvec::ArrayVec;
#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DIGITS, MAX_RADIX, MIN_RADIX};
use crate::error::Error;

/// Ordered digit characters; the index of a character is its digit value.
///
/// An alphabet always holds between 2 and 36 unique ASCII characters, and its
/// length is the radix it writes numbers in.
///
/// # Example
/// ```rust
/// use radix_format::Alphabet;
///
/// let hex = Alphabet::default_for(16).unwrap();
/// assert_eq!(hex.as_str(), "0123456789abcdef");
///
/// let upper = Alphabet::new("0123456789ABCDEF").unwrap();
/// assert_eq!(upper.radix(), 16);
/// assert_eq!(upper.value_of('C'), Some(12));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "with-serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    digits: ArrayVec<u8, { MAX_RADIX as usize }>,
}

impl Alphabet {
    /// Builds an alphabet from the given characters.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 or more than 36 characters, if a
    /// character is not ASCII or if a character appears twice.
    pub fn new(chars: &str) -> Result<Alphabet, Error> {
        let mut digits = ArrayVec::new();
        for c in chars.chars() {
            if !c.is_ascii() {
                return Err(Error::non_ascii_digit(c));
            }
            let byte = c as u8;
            if digits.contains(&byte) {
                return Err(Error::duplicate_digit(c));
            }
            if digits.try_push(byte).is_err() {
                return Err(Error::invalid_radix(chars.chars().count().min(255) as u8));
            }
        }
        if digits.len() < MIN_RADIX as usize {
            return Err(Error::invalid_radix(digits.len() as u8));
        }
        Ok(Alphabet { digits })
    }

    /// Returns the default alphabet for `radix`: `0-9` followed by `a-z`, truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if `radix` is not between 2 and 36.
    pub fn default_for(radix: u8) -> Result<Alphabet, Error> {
        check_radix(radix)?;
        let mut digits = ArrayVec::new();
        for &byte in &DEFAULT_DIGITS[..radix as usize] {
            digits.push(byte);
        }
        Ok(Alphabet { digits })
    }

    /// Returns the radix this alphabet writes numbers in, i.e. its length.
    pub fn radix(&self) -> u8 {
        self.digits.len() as u8
    }

    /// Returns the characters as a `&str`.
    pub fn as_str(&self) -> &str {
        // Safe because every digit was checked to be ASCII on construction.
        unsafe { str::from_utf8_unchecked(&self.digits) }
    }

    /// Returns the characters as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the digit value `c` stands for, if it is part of this alphabet.
    pub fn value_of(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        self.digits
            .iter()
            .position(|&d| d == c as u8)
            .map(|i| i as u8)
    }

    #[inline(always)]
    pub(crate) fn digit(&self, value: usize) -> u8 {
        self.digits[value]
    }
}

impl Default for Alphabet {
    /// Returns the decimal alphabet `0123456789`.
    fn default() -> Alphabet {
        let mut digits = ArrayVec::new();
        for &byte in &DEFAULT_DIGITS[..10] {
            digits.push(byte);
        }
        Alphabet { digits }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Alphabet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl str::FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Alphabet, Error> {
        Alphabet::new(s)
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::*;

    impl core::convert::TryFrom<String> for Alphabet {
        type Error = Error;

        fn try_from(s: String) -> Result<Alphabet, Error> {
            Alphabet::new(&s)
        }
    }

    impl From<Alphabet> for String {
        fn from(alphabet: Alphabet) -> String {
            alphabet.as_str().to_string()
        }
    }
}

fn check_radix(radix: u8) -> Result<(), Error> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::invalid_radix(radix));
    }
    Ok(())
}
