use statig::prelude::*;
use std::fmt;

use super::secret::{SecretSource, ThreadRngSecret};

/// Secrets are drawn from `0..DEFAULT_SECRET_UPPER_BOUND` unless configured.
pub const DEFAULT_SECRET_UPPER_BOUND: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(pub i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessReply {
    TooHigh(i64),
    TooLow(i64),
    Won { secret: i64, guesses: u32 },
    AlreadyWon,
}

impl GuessReply {
    pub fn is_win(&self) -> bool {
        matches!(self, GuessReply::Won { .. })
    }
}

impl fmt::Display for GuessReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessReply::TooHigh(guess) => write!(f, "{guess} is too high!"),
            GuessReply::TooLow(guess) => write!(f, "{guess} is too low!"),
            GuessReply::Won { secret, guesses } => {
                write!(f, "You win! You found {secret} in {guesses} guesses.")
            }
            GuessReply::AlreadyWon => f.write_str("The game is over, you already won!"),
        }
    }
}

#[derive(Debug, Default)]
struct Round {
    secret: i64,
    guesses: u32,
}

impl Round {
    fn new(secret: i64) -> Self {
        Self {
            secret,
            ..Default::default()
        }
    }

    fn count_guess(&mut self) {
        self.guesses = self.guesses.saturating_add(1);
    }
}

// Each state handler answers the guess through `context`.
#[state_machine(initial = "State::in_progress()", state(derive(Debug, Clone, PartialEq, Eq)))]
impl Round {
    #[state]
    fn in_progress(&mut self, context: &mut Option<GuessReply>, event: &Guess) -> Outcome<State> {
        self.count_guess();
        let Guess(guess) = *event;
        if guess == self.secret {
            tracing::info!(guesses = self.guesses, "Secret found");
            *context = Some(GuessReply::Won {
                secret: self.secret,
                guesses: self.guesses,
            });
            return Transition(State::won());
        }
        let reply = if guess > self.secret {
            GuessReply::TooHigh(guess)
        } else {
            GuessReply::TooLow(guess)
        };
        tracing::debug!(guess = guess, guesses = self.guesses, "Guess missed");
        *context = Some(reply);
        Handled
    }

    #[state]
    fn won(&mut self, context: &mut Option<GuessReply>, event: &Guess) -> Outcome<State> {
        self.count_guess();
        tracing::debug!(guess = event.0, guesses = self.guesses, "Guess after game over");
        *context = Some(GuessReply::AlreadyWon);
        Handled
    }
}

/// One round of the guessing game. Each instance has its own secret and
/// guess counter.
pub struct GuessingGame {
    machine: StateMachine<Round>,
}

/// Start a game with a secret drawn from the thread RNG.
pub fn guessing_game() -> GuessingGame {
    GuessingGame::new()
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessingGame {
    /// Start a game with a secret drawn from the thread RNG in
    /// `0..DEFAULT_SECRET_UPPER_BOUND`.
    pub fn new() -> Self {
        Self::with_source(&mut ThreadRngSecret, DEFAULT_SECRET_UPPER_BOUND)
    }

    /// Start a game whose secret comes from `source`, bounded by `upper`.
    pub fn with_source<S: SecretSource + ?Sized>(source: &mut S, upper: u32) -> Self {
        let secret = source.draw(upper);
        tracing::debug!(upper = upper, "Guessing game started");
        Self {
            machine: Round::new(secret).state_machine(),
        }
    }

    pub fn make_guess(&mut self, guess: i64) -> GuessReply {
        let mut reply = None;
        self.machine.handle_with_context(&Guess(guess), &mut reply);
        let Some(reply) = reply else {
            unreachable!("every game state answers a guess");
        };
        reply
    }

    pub fn guesses(&self) -> u32 {
        self.machine.inner().guesses
    }

    pub fn is_won(&self) -> bool {
        matches!(self.machine.state(), State::Won { .. })
    }
}

impl fmt::Debug for GuessingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuessingGame")
            .field("guesses", &self.guesses())
            .field("won", &self.is_won())
            .finish_non_exhaustive()
    }
}
