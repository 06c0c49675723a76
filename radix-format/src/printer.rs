mod lr;
mod lr_pairs;
mod modulo;
mod modulo_pairs;

use core::fmt;

use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::constants::MAX_BUF_LEN;
use crate::error::Error;
use crate::natural::Natural;
use crate::pair_table::PairTable;
use crate::power_cache::PowerCache;
use crate::radix_format::RadixFormat;
use crate::strategy::Strategy;

/// <b><u>A key type</u></b>. Writes unsigned integers of type `N` in a configurable
/// radix and alphabet.
///
/// A printer owns everything it needs to write a number: its alphabet, the
/// digit-pair table derived from it, a lazily grown cache of radix powers and a
/// scratch [`Buffer`]. Printing takes `&mut self` because the power cache and the
/// buffer are updated in place; use one printer per thread.
///
/// # Example
/// ```rust
/// use radix_format::{Printer, Strategy};
///
/// let mut printer = Printer::<u32>::new(Strategy::LeftToRightDigitPair);
/// assert_eq!(printer.encode(5607), "5607");
///
/// printer.set_radix(16).unwrap();
/// assert_eq!(printer.encode(77), "4d");
///
/// printer.set_alphabet("0123456789ABCDEF").unwrap();
/// assert_eq!(printer.encode(0xBEEF), "BEEF");
/// ```
///
/// [`Buffer`]: struct.Buffer.html
#[derive(Clone, Debug)]
pub struct Printer<N>
where
    N: Natural,
{
    strategy: Strategy,
    alphabet: Alphabet,
    pairs: PairTable,
    powers: PowerCache<N>,
    radix: N,
    radix_sqr: Option<N>,
    buffer: Buffer,
}

impl<N> Printer<N>
where
    N: Natural,
{
    /// Constructs a printer for radix 10 with the default alphabet.
    pub fn new(strategy: Strategy) -> Printer<N> {
        Printer::from_alphabet(strategy, Alphabet::default())
    }

    /// Constructs a printer for `radix` with the default alphabet (`0-9` then `a-z`).
    ///
    /// # Errors
    ///
    /// Returns an error if `radix` is not between 2 and 36.
    pub fn with_radix(strategy: Strategy, radix: u8) -> Result<Printer<N>, Error> {
        let alphabet = Alphabet::default_for(radix)?;
        Ok(Printer::from_alphabet(strategy, alphabet))
    }

    /// Constructs a printer whose radix is the number of characters in `chars`.
    ///
    /// # Errors
    ///
    /// Returns an error if `chars` is not a valid [`Alphabet`].
    ///
    /// [`Alphabet`]: struct.Alphabet.html
    pub fn with_alphabet(strategy: Strategy, chars: &str) -> Result<Printer<N>, Error> {
        let alphabet = Alphabet::new(chars)?;
        Ok(Printer::from_alphabet(strategy, alphabet))
    }

    /// Constructs a printer from a validated [`RadixFormat`].
    ///
    /// [`RadixFormat`]: struct.RadixFormat.html
    pub fn from_format(format: &RadixFormat) -> Printer<N> {
        Printer::from_alphabet(format.strategy(), format.alphabet().clone())
    }

    fn from_alphabet(strategy: Strategy, alphabet: Alphabet) -> Printer<N> {
        debug_assert!(N::MAX_DIGITS < MAX_BUF_LEN);
        let radix = alphabet.radix();
        Printer {
            strategy,
            pairs: PairTable::new(&alphabet),
            powers: PowerCache::new(radix),
            radix: N::from_radix(radix),
            radix_sqr: N::try_from_u16(radix as u16 * radix as u16),
            alphabet,
            buffer: Buffer::new(),
        }
    }

    /// Switches to `radix` with its default alphabet.
    ///
    /// Rebuilds the digit-pair table and drops every cached power, so nothing
    /// computed for the previous radix is read again.
    ///
    /// # Errors
    ///
    /// Returns an error if `radix` is not between 2 and 36; the printer is left
    /// unchanged.
    pub fn set_radix(&mut self, radix: u8) -> Result<(), Error> {
        self.alphabet = Alphabet::default_for(radix)?;
        self.pairs.rebuild(&self.alphabet);
        self.powers.reset(radix);
        self.radix = N::from_radix(radix);
        self.radix_sqr = N::try_from_u16(radix as u16 * radix as u16);
        Ok(())
    }

    /// Replaces the alphabet, keeping the radix.
    ///
    /// # Errors
    ///
    /// Returns an error if `chars` is not a valid alphabet, or if it does not have
    /// exactly [`radix`] characters; the printer is left unchanged.
    ///
    /// [`radix`]: #method.radix
    pub fn set_alphabet(&mut self, chars: &str) -> Result<(), Error> {
        let alphabet = Alphabet::new(chars)?;
        if alphabet.radix() != self.radix() {
            return Err(Error::alphabet_length(
                self.radix() as usize,
                alphabet.radix() as usize,
            ));
        }
        self.alphabet = alphabet;
        self.pairs.rebuild(&self.alphabet);
        Ok(())
    }

    /// Switches the digit extraction strategy. Tables are kept as they are.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Returns the radix numbers are written in.
    pub fn radix(&self) -> u8 {
        self.alphabet.radix()
    }

    /// Returns the alphabet numbers are written with.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the digit extraction strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the powers of the radix computed so far, starting at `radix⁰`.
    ///
    /// Only the left-to-right strategies grow this cache.
    pub fn powers(&self) -> &[N] {
        self.powers.powers()
    }

    /// Returns `true` once the power cache holds the largest power of the radix that
    /// fits in `N`.
    pub fn powers_exhausted(&self) -> bool {
        self.powers.is_exhausted()
    }

    /// Writes `n` into the printer's own buffer and returns the digits.
    ///
    /// The returned slice is overwritten by the next call.
    pub fn encode(&mut self, n: N) -> &str {
        self.fill_buffer(n);
        self.buffer.as_str()
    }

    /// Returns the buffer holding the digits of the last encoded number.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Writes `n` into `out` followed by a NUL byte and returns the number of digits
    /// (not counting the NUL).
    ///
    /// # Errors
    ///
    /// Returns an error if `out` cannot hold the digits and the terminator; nothing
    /// is written to `out` in that case.
    pub fn print_to_slice(&mut self, n: N, out: &mut [u8]) -> Result<usize, Error> {
        self.fill_buffer(n);
        let digits = self.buffer.as_bytes_with_nul();
        if digits.len() > out.len() {
            return Err(Error::capacity(digits.len(), out.len()));
        }
        out[..digits.len()].copy_from_slice(digits);
        Ok(digits.len() - 1)
    }

    /// Writes exactly the digits of `n` into a stream-like sink.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `w`.
    pub fn print_to_fmt<W>(&mut self, n: N, w: &mut W) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
    {
        w.write_str(self.encode(n))
    }

    #[inline(always)]
    fn fill_buffer(&mut self, n: N) {
        match self.strategy {
            Strategy::RightToLeftSingleDigit => {
                modulo::print(n, self.radix, &self.alphabet, &mut self.buffer)
            }
            Strategy::RightToLeftDigitPair => modulo_pairs::print(
                n,
                self.radix,
                self.radix_sqr,
                &self.alphabet,
                &self.pairs,
                &mut self.buffer,
            ),
            Strategy::LeftToRightSingleDigit => {
                lr::print(n, &mut self.powers, &self.alphabet, &mut self.buffer)
            }
            Strategy::LeftToRightDigitPair => lr_pairs::print(
                n,
                &mut self.powers,
                &self.alphabet,
                &self.pairs,
                &mut self.buffer,
            ),
        }
    }
}

impl<N> Default for Printer<N>
where
    N: Natural,
{
    /// Radix 10, default alphabet and the default [`Strategy`].
    ///
    /// [`Strategy`]: enum.Strategy.html
    fn default() -> Printer<N> {
        Printer::new(Strategy::default())
    }
}

#[cfg(feature = "std")]
mod standard {
    use std::io;

    use super::*;

    impl<N> Printer<N>
    where
        N: Natural,
    {
        /// Writes the digits of `n` into a file-like sink with a formatted write and
        /// returns the number of digits written.
        ///
        /// # Errors
        ///
        /// Returns any error reported by `w`.
        pub fn print_to_io<W>(&mut self, n: N, w: &mut W) -> io::Result<usize>
        where
            W: io::Write + ?Sized,
        {
            let digits = self.encode(n);
            write!(w, "{}", digits)?;
            Ok(digits.len())
        }
    }
}
