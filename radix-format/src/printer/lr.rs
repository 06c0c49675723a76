use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::natural::Natural;
use crate::power_cache::PowerCache;

/// Writes `n` most significant digit first by dividing by descending powers of the
/// radix, and subtracting what each digit accounts for.
#[inline(never)]
pub(crate) fn print<N>(
    mut n: N,
    cache: &mut PowerCache<N>,
    alphabet: &Alphabet,
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

    let top = cache.ensure_covers(n);
    for &power in cache.powers()[..=top].iter().rev() {
        let digit = n / power;
        debug_assert!(digit.as_index() < alphabet.radix() as usize);
        buf.push(alphabet.digit(digit.as_index()));
        n = n - digit * power;
    }
    debug_assert!(n == N::ZERO, "value not exhausted: {:?}", n);

    buf.terminate();
}
