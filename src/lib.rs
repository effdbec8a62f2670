// Pocket Katas Library - small stateful exercises
// This exposes the exercises and the CLI plumbing for testing and integration

pub mod account;
pub mod cli;
pub mod config;
pub mod curried;
pub mod guessing;
pub mod telemetry;

// Re-export key types for easy access
pub use account::{create_account, message, Account, AccountError, Money, Pin, Receipt};
pub use config::PocketKatasConfig;
pub use curried::{curried_add, sum_chain, Adder, Step};
pub use guessing::{
    guessing_game, FixedSecret, GuessReply, GuessingGame, RngSecret, SecretSource, ThreadRngSecret,
};
pub use telemetry::{create_session_span, generate_session_id, init_telemetry};
