use arrayvec::ArrayVec;

use crate::constants::MAX_POWERS;
use crate::natural::Natural;

/// Powers of the radix that fit in `N`, grown only as far as printed values need.
///
/// Starts out holding `radix⁰` alone. Once multiplying the last power by the radix
/// would overflow `N` the cache is marked exhausted and never grows again, until
/// [`reset`] installs a new radix.
///
/// [`reset`]: #method.reset
#[derive(Clone, Debug)]
pub(crate) struct PowerCache<N> {
    radix: N,
    powers: ArrayVec<N, MAX_POWERS>,
    exhausted: bool,
}

impl<N> PowerCache<N>
where
    N: Natural,
{
    pub(crate) fn new(radix: u8) -> PowerCache<N> {
        let mut cache = PowerCache {
            radix: N::ONE,
            powers: ArrayVec::new(),
            exhausted: false,
        };
        cache.reset(radix);
        cache
    }

    pub(crate) fn reset(&mut self, radix: u8) {
        self.radix = N::from_radix(radix);
        self.powers.clear();
        self.powers.push(N::ONE);
        self.exhausted = false;
    }

    /// Returns the index of the largest cached power that is `<= value`, growing the
    /// cache first if `value` is beyond it. `value` must not be zero.
    pub(crate) fn ensure_covers(&mut self, value: N) -> usize {
        debug_assert!(value > N::ZERO);

        while !self.exhausted && self.last() <= value {
            self.grow();
        }

        let last = self.powers.len() - 1;
        if self.powers[last] <= value {
            // Only reachable once exhausted: value is in the widest bracket N has.
            return last;
        }

        // powers[0] == 1 <= value, so at least one power qualifies.
        self.powers.partition_point(|&p| p <= value) - 1
    }

    pub(crate) fn powers(&self) -> &[N] {
        &self.powers
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline(always)]
    fn last(&self) -> N {
        self.powers[self.powers.len() - 1]
    }

    fn grow(&mut self) {
        match self.last().checked_mul(self.radix) {
            Some(next) if !self.powers.is_full() => self.powers.push(next),
            _ => self.exhausted = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_radix_pow_zero() {
        let cache = PowerCache::<u32>::new(10);
        assert_eq!(cache.powers(), &[1]);
        assert!(!cache.is_exhausted());
    }

    #[test]
    fn test_grows_on_demand() {
        let mut cache = PowerCache::<u64>::new(10);
        assert_eq!(cache.ensure_covers(1), 0);
        assert_eq!(cache.ensure_covers(9), 0);
        assert_eq!(cache.ensure_covers(43), 1);
        assert_eq!(cache.powers(), &[1, 10, 100]);

        assert_eq!(cache.ensure_covers(5607), 3);
        assert_eq!(cache.powers().len(), 5);

        // smaller values are answered from what is already cached
        assert_eq!(cache.ensure_covers(10), 1);
        assert_eq!(cache.ensure_covers(99), 1);
        assert_eq!(cache.ensure_covers(100), 2);
        assert_eq!(cache.powers().len(), 5);
        assert!(!cache.is_exhausted());
    }

    #[test]
    fn test_stops_before_overflow() {
        let mut cache = PowerCache::<u32>::new(10);
        assert_eq!(cache.ensure_covers(u32::MAX), 9);
        assert!(cache.is_exhausted());
        assert_eq!(cache.powers().last(), Some(&1_000_000_000));

        assert_eq!(cache.ensure_covers(2_147_483_647), 9);
        assert_eq!(cache.ensure_covers(999_999_999), 8);
        assert_eq!(cache.powers().len(), 10);
    }

    #[test]
    fn test_radix_two_fills_every_bit() {
        let mut cache = PowerCache::<u128>::new(2);
        assert_eq!(cache.ensure_covers(u128::MAX), 127);
        assert!(cache.is_exhausted());
        assert_eq!(cache.powers().len(), 128);
        assert_eq!(cache.powers()[127], 1 << 127);
    }

    #[test]
    fn test_u8_with_large_radix() {
        let mut cache = PowerCache::<u8>::new(36);
        assert_eq!(cache.ensure_covers(35), 0);
        assert_eq!(cache.ensure_covers(36), 1);
        assert_eq!(cache.ensure_covers(255), 1);
        assert!(cache.is_exhausted());
        assert_eq!(cache.powers(), &[1, 36]);
    }

    #[test]
    fn test_reset_discards_old_powers() {
        let mut cache = PowerCache::<u32>::new(10);
        cache.ensure_covers(u32::MAX);
        assert!(cache.is_exhausted());

        cache.reset(16);
        assert_eq!(cache.powers(), &[1]);
        assert!(!cache.is_exhausted());
        assert_eq!(cache.ensure_covers(512), 2);
        assert_eq!(cache.powers(), &[1, 16, 256, 4096]);
    }
}
