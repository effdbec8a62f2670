// Secret sources for the guessing game, injectable for tests

use rand::Rng;

/// Provides the game's secret number.
pub trait SecretSource {
    /// Draw a secret in `0..upper`.
    fn draw(&mut self, upper: u32) -> i64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSecret;

impl SecretSource for ThreadRngSecret {
    fn draw(&mut self, upper: u32) -> i64 {
        i64::from(rand::rng().random_range(0..upper.max(1)))
    }
}

/// Draws from any caller-supplied RNG, e.g. a seeded `StdRng`.
#[derive(Debug)]
pub struct RngSecret<R>(pub R);

impl<R: Rng> SecretSource for RngSecret<R> {
    fn draw(&mut self, upper: u32) -> i64 {
        i64::from(self.0.random_range(0..upper.max(1)))
    }
}

/// Always yields the same secret, ignoring the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn draw(&mut self, _upper: u32) -> i64 {
        self.0
    }
}
