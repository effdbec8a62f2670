// Number-guessing game: a secret drawn at creation, guesses answered with
// hints until the first exact match.

pub mod machine;
pub mod secret;

pub use machine::{guessing_game, Guess, GuessReply, GuessingGame, DEFAULT_SECRET_UPPER_BOUND};
pub use secret::{FixedSecret, RngSecret, SecretSource, ThreadRngSecret};
