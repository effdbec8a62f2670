// PIN-gated account: every read or write of the balance and PIN goes
// through a verification of the caller-supplied PIN first.

pub mod ledger;
pub mod pin;
pub mod types;


pub use ledger::{create_account, Account};
pub use pin::Pin;
pub use types::{message, AccountError, Money, Receipt};
