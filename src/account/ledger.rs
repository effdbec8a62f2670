use rust_decimal::Decimal;
use std::fmt;

use super::pin::Pin;
use super::types::{AccountError, Receipt};

/// A single bank account whose balance and PIN are reachable only through
/// PIN-gated operations.
pub struct Account {
    pin: Pin,
    balance: Decimal,
}

/// Open an account with `pin`, starting at `initial_balance` or zero.
pub fn create_account(pin: impl Into<Pin>, initial_balance: Option<Decimal>) -> Account {
    Account::new(pin, initial_balance.unwrap_or_default())
}

impl Account {
    pub fn new(pin: impl Into<Pin>, initial_balance: Decimal) -> Self {
        tracing::debug!("Account opened");
        Self {
            pin: pin.into(),
            balance: initial_balance,
        }
    }

    /// True iff `candidate` is exactly the stored PIN.
    pub fn verify_pin(&self, candidate: impl Into<Pin>) -> bool {
        self.pin == candidate.into()
    }

    fn authorize(&self, candidate: impl Into<Pin>, operation: &'static str) -> bool {
        let granted = self.verify_pin(candidate);
        if !granted {
            tracing::warn!(operation = operation, "PIN rejected");
        }
        granted
    }

    pub fn check_balance(&self, candidate: impl Into<Pin>) -> Result<Receipt, AccountError> {
        if !self.authorize(candidate, "check_balance") {
            return Err(AccountError::InvalidPin);
        }
        Ok(Receipt::Balance(self.balance))
    }

    /// Add `amount` to the balance. The amount is not sign-checked.
    pub fn deposit(
        &mut self,
        candidate: impl Into<Pin>,
        amount: Decimal,
    ) -> Result<Receipt, AccountError> {
        if !self.authorize(candidate, "deposit") {
            return Err(AccountError::InvalidPin);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        tracing::debug!(operation = "deposit", amount = %amount, "Deposit applied");
        Ok(Receipt::Deposited {
            amount,
            balance: self.balance,
        })
    }

    /// Take `amount` out of the balance. Only succeeds while the balance is
    /// strictly greater than `amount`; emptying the account exactly is refused.
    pub fn withdraw(
        &mut self,
        candidate: impl Into<Pin>,
        amount: Decimal,
    ) -> Result<Receipt, AccountError> {
        if !self.authorize(candidate, "withdraw") {
            return Err(AccountError::InvalidPin);
        }
        if self.balance <= amount {
            tracing::debug!(operation = "withdraw", amount = %amount, "Withdrawal cancelled");
            return Err(AccountError::InsufficientFunds);
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;
        tracing::debug!(operation = "withdraw", amount = %amount, "Withdrawal applied");
        Ok(Receipt::Withdrew {
            amount,
            balance: self.balance,
        })
    }

    pub fn change_pin(
        &mut self,
        candidate: impl Into<Pin>,
        new_pin: impl Into<Pin>,
    ) -> Result<Receipt, AccountError> {
        if !self.authorize(candidate, "change_pin") {
            return Err(AccountError::PinChangeRejected);
        }
        self.pin = new_pin.into();
        tracing::info!(operation = "change_pin", "PIN changed");
        Ok(Receipt::PinChanged)
    }
}

// Balance and PIN stay behind the gate in debug output too.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account").finish_non_exhaustive()
    }
}
