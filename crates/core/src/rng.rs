//! RNG module - uniform random template selection for spawning
//!
//! Each spawn picks one of the 7 templates with equal probability,
//! independently of previous picks (no bag). A small seedable LCG keeps the
//! sequence reproducible for tests and scripted runs.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output rather than taking a remainder; the low
    /// bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform piece picker
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick the next piece kind
    pub fn next(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }

    /// Preview the next piece kind without consuming it
    pub fn peek(&self) -> PieceKind {
        self.clone().next()
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_randomizer_peek_matches_next() {
        let mut randomizer = PieceRandomizer::new(99);
        for _ in 0..20 {
            let peeked = randomizer.peek();
            assert_eq!(peeked, randomizer.next());
        }
    }

    #[test]
    fn test_randomizer_covers_all_kinds() {
        let mut randomizer = PieceRandomizer::new(1);
        let mut seen = [0u32; 7];
        for _ in 0..700 {
            seen[randomizer.next().index()] += 1;
        }
        for (i, count) in seen.iter().enumerate() {
            assert!(*count > 50, "{:?} drawn only {} times", PieceKind::ALL[i], count);
        }
    }
}
