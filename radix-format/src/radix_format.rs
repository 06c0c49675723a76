#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::strategy::Strategy;

/// Type for representing a printer configuration: alphabet (and with it the radix)
/// plus the digit extraction [`Strategy`].
///
/// A `RadixFormat` is always valid, so a [`Printer`] built from one cannot fail.
///
/// # Example
/// ```rust
/// use radix_format::{Printer, RadixFormat, Strategy};
///
/// let format = RadixFormat::builder()
///     .alphabet("01234567")
///     .strategy(Strategy::LeftToRightSingleDigit)
///     .build()
///     .unwrap();
///
/// let mut printer = Printer::<u64>::from_format(&format);
/// assert_eq!(printer.encode(255), "377");
/// ```
///
/// [`Printer`]: struct.Printer.html
/// [`Strategy`]: enum.Strategy.html
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct RadixFormat {
    alphabet: Alphabet,
    strategy: Strategy,
}

impl RadixFormat {
    /// Constructs a [`RadixFormatBuilder`].
    ///
    /// [`RadixFormatBuilder`]: struct.RadixFormatBuilder.html
    pub fn builder() -> RadixFormatBuilder {
        RadixFormatBuilder::new()
    }

    /// Turns `self` into a [`RadixFormatBuilder`].
    ///
    /// [`RadixFormatBuilder`]: struct.RadixFormatBuilder.html
    pub fn into_builder(self) -> RadixFormatBuilder {
        self.into()
    }

    /// Returns this format's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns this format's radix.
    pub fn radix(&self) -> u8 {
        self.alphabet.radix()
    }

    /// Returns this format's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for RadixFormat {
    /// Radix 10 with the digits `0-9`, written with the default [`Strategy`].
    ///
    /// [`Strategy`]: enum.Strategy.html
    fn default() -> RadixFormat {
        RadixFormat {
            alphabet: Alphabet::default(),
            strategy: Strategy::default(),
        }
    }
}

/// Type for building [`RadixFormat`]s.
///
/// Invalid settings are remembered and reported by [`build`].
///
/// [`RadixFormat`]: struct.RadixFormat.html
/// [`build`]: #method.build
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RadixFormatBuilder {
    radix: Option<u8>,
    alphabet: Result<Option<Alphabet>, Error>,
    strategy: Strategy,
}

impl RadixFormatBuilder {
    fn new() -> RadixFormatBuilder {
        RadixFormatBuilder {
            radix: None,
            alphabet: Ok(None),
            strategy: Strategy::default(),
        }
    }

    /// Sets the radix. Without an explicit [`alphabet`], the default digits `0-9`
    /// then `a-z` are used.
    ///
    /// [`alphabet`]: #method.alphabet
    pub fn radix(mut self, radix: u8) -> RadixFormatBuilder {
        self.radix = Some(radix);
        self
    }

    /// Sets the alphabet. If a [`radix`] was given too, their lengths must agree.
    ///
    /// [`radix`]: #method.radix
    pub fn alphabet<S>(mut self, chars: S) -> RadixFormatBuilder
    where
        S: AsRef<str>,
    {
        self.alphabet = Alphabet::new(chars.as_ref()).map(Some);
        self
    }

    /// Sets the strategy.
    pub fn strategy(mut self, strategy: Strategy) -> RadixFormatBuilder {
        self.strategy = strategy;
        self
    }

    /// Construct a [`RadixFormat`].
    ///
    /// # Errors
    ///
    /// Return an error if:
    /// - The radix is not between 2 and 36
    /// - The alphabet is invalid, or its length differs from the radix
    ///
    /// [`RadixFormat`]: struct.RadixFormat.html
    pub fn build(self) -> Result<RadixFormat, Error> {
        let alphabet = match (self.alphabet?, self.radix) {
            (Some(alphabet), Some(radix)) if alphabet.radix() != radix => {
                return Err(Error::alphabet_length(
                    radix as usize,
                    alphabet.radix() as usize,
                ));
            }
            (Some(alphabet), _) => alphabet,
            (None, Some(radix)) => Alphabet::default_for(radix)?,
            (None, None) => Alphabet::default(),
        };
        Ok(RadixFormat {
            alphabet,
            strategy: self.strategy,
        })
    }
}

impl From<RadixFormat> for RadixFormatBuilder {
    fn from(format: RadixFormat) -> RadixFormatBuilder {
        RadixFormatBuilder {
            radix: Some(format.alphabet.radix()),
            alphabet: Ok(Some(format.alphabet)),
            strategy: format.strategy,
        }
    }
}
