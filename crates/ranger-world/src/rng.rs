//! Seeded pseudo-random number generator.
//!
//! Mulberry32: a 32-bit counter advanced by a fixed odd increment, then
//! scrambled with a multiply-xor-shift mix. Full 2^32 period, and the
//! same seed yields the same sequence on every platform.

/// Counter increment (odd, so the counter visits every 32-bit state).
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, for mapping `u32` outputs into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic random source for map generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkRng {
    state: u32,
}

impl ParkRng {
    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform integer in `[0, n)`; `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    /// `+1` or `-1` with equal probability.
    pub fn sign(&mut self) -> i32 {
        if self.chance(0.5) {
            1
        } else {
            -1
        }
    }

    /// River meander step: `floor((next - 0.5) * 2)`, so `-1` or `0`.
    pub fn meander(&mut self) -> i32 {
        ((self.next_f64() - 0.5) * 2.0).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_for_seed_one() {
        let mut rng = ParkRng::new(1);
        let expected = [0.627_073_940_588_161_3, 0.002_735_721_180_215_478, 0.527_447_039_959_952_2];
        for want in expected {
            assert!((rng.next_f64() - want).abs() < 1e-15);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ParkRng::new(1234);
        let mut b = ParkRng::new(1234);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = ParkRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_meander_range() {
        let mut rng = ParkRng::new(99);
        let mut seen = [false; 2];
        for _ in 0..1000 {
            let step = rng.meander();
            assert!(step == -1 || step == 0);
            seen[(step + 1) as usize] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_below_bounds() {
        let mut rng = ParkRng::new(3);
        for _ in 0..1000 {
            assert!(rng.below(40) < 40);
        }
    }
}
