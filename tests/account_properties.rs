// Property-Based Testing for the PIN-gated account
// Balance and PIN invariants checked over generated PINs and amounts

use pocket_katas::{create_account, Account, AccountError, Receipt};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn balance_of(account: &Account, pin: &str) -> Decimal {
    match account.check_balance(pin) {
        Ok(Receipt::Balance(balance)) => balance,
        other => panic!("expected a balance receipt, got {other:?}"),
    }
}

// Strategy for PINs: short digit strings
fn pin_strategy() -> impl Strategy<Value = String> {
    "[0-9]{4,6}"
}

// Strategy for cent-precision amounts up to one million
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn wrong_pin_changes_nothing(
        pin in pin_strategy(),
        wrong in pin_strategy(),
        opening in amount_strategy(),
        amount in amount_strategy(),
        new_pin in pin_strategy()
    ) {
        prop_assume!(pin != wrong);
        let mut account = create_account(pin.as_str(), Some(opening));

        prop_assert_eq!(account.check_balance(wrong.as_str()), Err(AccountError::InvalidPin));
        prop_assert_eq!(account.deposit(wrong.as_str(), amount), Err(AccountError::InvalidPin));
        prop_assert_eq!(account.withdraw(wrong.as_str(), amount), Err(AccountError::InvalidPin));
        prop_assert_eq!(
            account.change_pin(wrong.as_str(), new_pin.as_str()),
            Err(AccountError::PinChangeRejected)
        );

        prop_assert!(account.verify_pin(pin.as_str()));
        prop_assert_eq!(balance_of(&account, &pin), opening);
    }

    #[test]
    fn deposit_adds_amount(
        pin in pin_strategy(),
        opening in amount_strategy(),
        amount in amount_strategy()
    ) {
        let mut account = create_account(pin.as_str(), Some(opening));
        let receipt = account.deposit(pin.as_str(), amount);
        prop_assert!(receipt.is_ok());
        prop_assert_eq!(balance_of(&account, &pin), opening + amount);
    }

    #[test]
    fn withdraw_below_balance_subtracts(
        pin in pin_strategy(),
        opening in amount_strategy(),
        fraction in 0u32..100
    ) {
        prop_assume!(opening > Decimal::ZERO);
        let amount = (opening * Decimal::from(fraction) / Decimal::from(100)).round_dp(2);
        prop_assume!(amount < opening);

        let mut account = create_account(pin.as_str(), Some(opening));
        let receipt = account.withdraw(pin.as_str(), amount);
        prop_assert!(receipt.is_ok());
        prop_assert_eq!(balance_of(&account, &pin), opening - amount);
    }

    #[test]
    fn withdraw_of_whole_balance_is_refused(
        pin in pin_strategy(),
        opening in amount_strategy()
    ) {
        let mut account = create_account(pin.as_str(), Some(opening));
        prop_assert_eq!(
            account.withdraw(pin.as_str(), opening),
            Err(AccountError::InsufficientFunds)
        );
        prop_assert_eq!(balance_of(&account, &pin), opening);
    }

    #[test]
    fn change_pin_retires_old_pin(
        pin in pin_strategy(),
        new_pin in pin_strategy()
    ) {
        prop_assume!(pin != new_pin);
        let mut account = create_account(pin.as_str(), None);
        prop_assert_eq!(account.change_pin(pin.as_str(), new_pin.as_str()), Ok(Receipt::PinChanged));
        prop_assert!(!account.verify_pin(pin.as_str()));
        prop_assert!(account.verify_pin(new_pin.as_str()));
    }
}

#[test]
fn accounts_do_not_share_state() {
    let mut first = create_account("1111", Some(Decimal::from(10)));
    let second = create_account("1111", Some(Decimal::from(10)));

    first.deposit("1111", Decimal::from(5)).unwrap();
    assert_eq!(balance_of(&first, "1111"), Decimal::from(15));
    assert_eq!(balance_of(&second, "1111"), Decimal::from(10));
}
