use arrayvec::ArrayVec;

use crate::alphabet::Alphabet;
use crate::constants::MAX_PAIRS;

/// Every two-digit combination of an alphabet, so digits can be emitted in pairs.
///
/// Entry `d1 * radix + d2` holds the characters for `d1` followed by `d2`, which
/// is exactly the index produced by `n % radix²` or `n / radix^k` for a pair.
#[derive(Clone, Debug)]
pub(crate) struct PairTable {
    pairs: ArrayVec<[u8; 2], MAX_PAIRS>,
}

impl PairTable {
    pub(crate) fn new(alphabet: &Alphabet) -> PairTable {
        let mut table = PairTable {
            pairs: ArrayVec::new(),
        };
        table.rebuild(alphabet);
        table
    }

    pub(crate) fn rebuild(&mut self, alphabet: &Alphabet) {
        self.pairs.clear();
        let digits = alphabet.as_bytes();
        for &high in digits {
            for &low in digits {
                self.pairs.push([high, low]);
            }
        }
        debug_assert_eq!(self.pairs.len(), digits.len() * digits.len());
    }

    #[inline(always)]
    pub(crate) fn pair(&self, index: usize) -> [u8; 2] {
        self.pairs[index]
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}
