use std::sync::atomic::{AtomicU64, Ordering};

/// Small PCG-style PRNG owned by the generator.
///
/// Kept local instead of pulling in `rand` so the engine stays portable to
/// wasm targets; `getrandom` supplies the seed entropy. Deterministic runs
/// use [`SimpleRng::with_seed`].
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator seeded from the OS entropy source.
    pub(crate) fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut seed_bytes) {
            Ok(()) => u64::from_le_bytes(seed_bytes),
            Err(_) => {
                // Fallback when no entropy source is available.
                static COUNTER: AtomicU64 = AtomicU64::new(1);
                COUNTER.fetch_add(1, Ordering::Relaxed)
            }
        };
        Self::with_seed(seed)
    }

    /// Create a generator with a fixed seed for reproducibility.
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        u64::from(xorshifted.rotate_right(rot))
    }

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    pub(crate) fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Fisher-Yates shuffle.
    pub(crate) fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}
