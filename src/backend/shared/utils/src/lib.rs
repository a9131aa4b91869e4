use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Source of randomness for the mock surfaces of the backend services.
///
/// Services take this as an injected dependency so tests can substitute a
/// seeded implementation and get deterministic output.
pub trait RandomSource: Send + Sync {
    /// Lowercase hex string of `len` digits.
    fn hex_string(&self, len: usize) -> String;

    /// Uniform value in `[low, high)`.
    fn range_u64(&self, low: u64, high: u64) -> u64;

    /// Uniform value in `[low, high)`.
    fn range_f64(&self, low: f64, high: f64) -> f64;
}

/// Production source backed by the thread-local generator.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn hex_string(&self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| HEX_DIGITS[rng.gen_range(0..16)] as char)
            .collect()
    }

    fn range_u64(&self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..high)
    }

    fn range_f64(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic source for tests.
pub struct SeededSource {
    inner: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn hex_string(&self, len: usize) -> String {
        let mut rng = self.inner.lock().expect("rng mutex poisoned");
        (0..len)
            .map(|_| HEX_DIGITS[rng.gen_range(0..16)] as char)
            .collect()
    }

    fn range_u64(&self, low: u64, high: u64) -> u64 {
        self.inner
            .lock()
            .expect("rng mutex poisoned")
            .gen_range(low..high)
    }

    fn range_f64(&self, low: f64, high: f64) -> f64 {
        self.inner
            .lock()
            .expect("rng mutex poisoned")
            .gen_range(low..high)
    }
}
