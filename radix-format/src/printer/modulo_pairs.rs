use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::natural::Natural;
use crate::pair_table::PairTable;

/// Writes `n` two digits at a time, least significant pair first, from the end of
/// `buf` backward.
///
/// `radix_sqr` is `None` when `radix²` does not fit in `N`; every value of `N` that
/// is at least `radix` is then itself a valid pair index.
#[inline(never)]
pub(crate) fn print<N>(
    mut n: N,
    radix: N,
    radix_sqr: Option<N>,
    alphabet: &Alphabet,
    pairs: &PairTable,
    buf: &mut Buffer,
) where
    N: Natural,
{
    buf.reset_back();

    if n == N::ZERO {
        buf.prepend(alphabet.digit(0));
        return;
    }

    // decode 2 chars while at least 2 remain
    while n >= radix {
        let index = match radix_sqr {
            Some(radix_sqr) => {
                let index = (n % radix_sqr).as_index();
                n = n / radix_sqr;
                index
            }
            None => {
                let index = n.as_index();
                n = N::ZERO;
                index
            }
        };
        buf.prepend_pair(pairs.pair(index));
    }

    // odd digit count: the most significant digit is left over
    if n > N::ZERO {
        debug_assert!(n < radix);
        buf.prepend(alphabet.digit(n.as_index()));
    }
}
