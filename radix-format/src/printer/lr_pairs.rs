use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::natural::Natural;
use crate::pair_table::PairTable;
use crate::power_cache::PowerCache;

/// Writes `n` most significant pair first, dividing by every other cached power of
/// the radix. The last one or two digits are emitted straight from what remains.
#[inline(never)]
pub(crate) fn print<N>(
    mut n: N,
    cache: &mut PowerCache<N>,
    alphabet: &Alphabet,
    pairs: &PairTable,
    buf: &mut Buffer,
) where
    N: Natural,
{
    buf.reset_front();

    if n == N::ZERO {
        buf.push(alphabet.digit(0));
        buf.terminate();
        return;
    }

    let radix = alphabet.radix() as usize;
    let powers = {
        let top = cache.ensure_covers(n);
        &cache.powers()[..=top]
    };

    // digits still to be written; powers[remaining - 2] isolates the leading pair
    let mut remaining = powers.len();
    while remaining > 2 {
        let power = powers[remaining - 2];
        let pair = n / power;
        debug_assert!(pair.as_index() < radix * radix);
        buf.push_pair(pairs.pair(pair.as_index()));
        n = n - pair * power;
        remaining -= 2;
    }

    if remaining == 2 {
        debug_assert!(n.as_index() < radix * radix);
        buf.push_pair(pairs.pair(n.as_index()));
    } else {
        debug_assert!(n.as_index() < radix);
        buf.push(alphabet.digit(n.as_index()));
    }

    buf.terminate();
}
