use crate::alphabet::Alphabet;
use crate::buffer::Buffer;
use crate::natural::Natural;

/// Writes `n` least significant digit first, from the end of `buf` backward.
#[inline(never)]
pub(crate) fn print<N>(mut n: N, radix: N, alphabet: &Alphabet, buf: &mut Buffer)
where
    N: Natural,
{
    buf.reset_back();

    if n == N::ZERO {
        buf.prepend(alphabet.digit(0));
        return;
    }

    while n > N::ZERO {
        let digit = (n % radix).as_index();
        buf.prepend(alphabet.digit(digit));
        n = n / radix;
    }
}
