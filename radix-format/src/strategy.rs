use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// How a [`Printer`] extracts digits.
///
/// Every strategy produces the same text for the same radix, alphabet and value;
/// they differ only in how much arithmetic that takes.
///
/// [`Printer`]: struct.Printer.html
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Repeated `% radix` and `/ radix`, least significant digit first, filling the
    /// buffer from its end.
    RightToLeftSingleDigit,
    /// Like [`RightToLeftSingleDigit`], but two digits per division via the
    /// digit-pair table.
    ///
    /// [`RightToLeftSingleDigit`]: #variant.RightToLeftSingleDigit
    RightToLeftDigitPair,
    /// Division by descending cached powers of the radix, most significant digit
    /// first. Uses subtraction instead of a remainder.
    LeftToRightSingleDigit,
    /// Like [`LeftToRightSingleDigit`], but stepping two powers at a time and
    /// emitting digits from the digit-pair table.
    ///
    /// [`LeftToRightSingleDigit`]: #variant.LeftToRightSingleDigit
    LeftToRightDigitPair,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::RightToLeftSingleDigit,
        Strategy::RightToLeftDigitPair,
        Strategy::LeftToRightSingleDigit,
        Strategy::LeftToRightDigitPair,
    ];

    /// Returns a short, stable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RightToLeftSingleDigit => "modulo",
            Strategy::RightToLeftDigitPair => "modulo-pairs",
            Strategy::LeftToRightSingleDigit => "left-to-right",
            Strategy::LeftToRightDigitPair => "left-to-right-pairs",
        }
    }

    /// Returns `true` if this strategy reads the power cache.
    pub fn uses_powers(&self) -> bool {
        matches!(
            self,
            Strategy::LeftToRightSingleDigit | Strategy::LeftToRightDigitPair
        )
    }
}

impl Default for Strategy {
    /// Returns [`RightToLeftDigitPair`], which needs no power cache.
    ///
    /// [`RightToLeftDigitPair`]: #variant.RightToLeftDigitPair
    fn default() -> Strategy {
        Strategy::RightToLeftDigitPair
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
