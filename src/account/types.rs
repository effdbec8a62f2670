use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// A currency amount rendered as `$<amount>` with trailing zeros dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

/// Successful outcome of a gated account operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Balance(Decimal),
    Deposited { amount: Decimal, balance: Decimal },
    Withdrew { amount: Decimal, balance: Decimal },
    PinChanged,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Balance(balance) => write!(f, "{}", Money(*balance)),
            Receipt::Deposited { amount, balance } => write!(
                f,
                "Successfully deposited {}. Current balance: {}.",
                Money(*amount),
                Money(*balance)
            ),
            Receipt::Withdrew { amount, balance } => write!(
                f,
                "Successfully withdrew {}. Current balance: {}.",
                Money(*amount),
                Money(*balance)
            ),
            Receipt::PinChanged => f.write_str("PIN successfully changed!"),
        }
    }
}

/// Rejected account operation. The messages are the exact strings shown
/// to account holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Invalid PIN.")]
    InvalidPin,
    /// PIN change rejected. Rendered without the trailing period.
    #[error("Invalid PIN")]
    PinChangeRejected,
    #[error("Withdrawal amount exceeds account balance. Transaction cancelled.")]
    InsufficientFunds,
    #[error("Amount out of range. Transaction cancelled.")]
    Overflow,
}

/// Render either side of an account outcome as the message shown to the holder.
pub fn message<T: fmt::Display, E: fmt::Display>(outcome: &Result<T, E>) -> String {
    match outcome {
        Ok(receipt) => receipt.to_string(),
        Err(rejection) => rejection.to_string(),
    }
}
