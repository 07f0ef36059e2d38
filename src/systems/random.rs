//! Random source for maze carving
//!
//! The carver never talks to a global RNG; it draws picks from whatever
//! source the session hands it. Tests substitute scripted sources to get
//! reproducible layouts.

/// Uniform selection among a finite candidate set.
pub trait RandomSource {
    /// An index in [0, n). `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Xorshift32 generator, the production source.
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seed the generator. Zero would lock xorshift into a fixed point, so
    /// it is replaced with the default seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 12345 } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        // Multiply-shift keeps the pick unbiased without a modulo.
        ((self.next_u32() as u64 * n as u64) >> 32) as usize
    }
}
