// End-to-end tests of the pocket-katas binary

use assert_cmd::Command;
use predicates::prelude::*;

fn pocket_katas() -> Command {
    let mut cmd = Command::cargo_bin("pocket-katas").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_exercises() {
    pocket_katas()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("guess"));
}

#[test]
fn test_account_session() {
    pocket_katas()
        .args(["account", "--pin", "1234", "--balance", "100"])
        .write_stdin("deposit 1234 50\nwithdraw 0000 10\nwithdraw 1234 150\nwithdraw 1234 100\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully deposited $50. Current balance: $150.",
        ))
        .stdout(predicate::str::contains("Invalid PIN."))
        .stdout(predicate::str::contains(
            "Withdrawal amount exceeds account balance. Transaction cancelled.",
        ))
        .stdout(predicate::str::contains(
            "Successfully withdrew $100. Current balance: $50.",
        ));
}

#[test]
fn test_add_prints_total() {
    pocket_katas()
        .args(["add", "1", "2", "3"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_add_with_no_numbers_prints_zero() {
    pocket_katas().arg("add").assert().success().stdout("0\n");
}

#[test]
fn test_guess_with_fixed_secret() {
    pocket_katas()
        .args(["guess", "--secret", "50"])
        .write_stdin("70\n50\n10\n")
        .assert()
        .success()
        .stdout("70 is too high!\nYou win! You found 50 in 2 guesses.\n");
}

#[test]
fn test_config_prints_defaults() {
    pocket_katas()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("secret_upper_bound"));
}

#[test]
fn test_account_requires_pin() {
    pocket_katas()
        .arg("account")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pin"));
}

#[test]
fn test_env_overrides_secret_bound() {
    pocket_katas()
        .env("POCKET_KATAS_GAME__SECRET_UPPER_BOUND", "1")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("secret_upper_bound = 1\n"));
}

#[test]
fn test_env_bound_drives_random_secret() {
    // A bound of 1 leaves 0 as the only possible secret
    pocket_katas()
        .env("POCKET_KATAS_GAME__SECRET_UPPER_BOUND", "1")
        .arg("guess")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout("You win! You found 0 in 1 guesses.\n");
}

#[test]
fn test_env_zero_bound_is_refused() {
    pocket_katas()
        .env("POCKET_KATAS_GAME__SECRET_UPPER_BOUND", "0")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret_upper_bound"));
}

#[test]
fn test_log_level_flag_enables_debug_logs() {
    pocket_katas()
        .args(["--log-level", "debug", "add", "1"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("Accumulation chain queried"));
}

#[test]
fn test_unknown_log_level_is_refused() {
    pocket_katas()
        .args(["--log-level", "nonsense", "add", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--log-level"));
}

#[test]
fn test_zero_upper_bound_is_refused() {
    pocket_katas()
        .args(["guess", "--upper", "0"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--upper"));
}
