use assert_matches::assert_matches;
use cosmwasm_std::coin;
use cw_tokenfactory::msg::ExecuteMsg;
use cw_tokenfactory::TokenFactoryError;

use crate::test_env::{TestEnv, ALICE, BOB, CAROL};

fn force_transfer(
    env: &mut TestEnv,
    sender: &str,
    amount: u128,
    denom: &str,
    from: &str,
    to: &str,
) -> Result<(), TokenFactoryError> {
    env.execute(
        sender,
        ExecuteMsg::ForceTransfer {
            amount: coin(amount, denom),
            from_address: from.to_string(),
            to_address: to.to_string(),
        },
    )
    .map(|_| ())
}

#[test]
fn test_force_transfer() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 10000, &denom, BOB).unwrap();

    force_transfer(&mut env, ALICE, 10000, &denom, BOB, CAROL).unwrap();
    assert_eq!(env.balance(BOB, &denom), 0);
    assert_eq!(env.balance(CAROL, &denom), 10000);
}

#[test]
fn test_force_transfer_by_non_admin_fails() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 10000, &denom, BOB).unwrap();
    let before = env.snapshot();

    let err = force_transfer(&mut env, CAROL, 10000, &denom, BOB, CAROL).unwrap_err();
    assert_eq!(err, TokenFactoryError::Unauthorized {});
    assert_eq!(env.snapshot(), before);
}

#[test]
fn test_force_transfer_insufficient_funds() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 100, &denom, BOB).unwrap();
    let before = env.snapshot();

    let err = force_transfer(&mut env, ALICE, 101, &denom, BOB, CAROL).unwrap_err();
    assert_matches!(err, TokenFactoryError::InsufficientFunds { .. });
    assert_eq!(env.snapshot(), before);
}

#[test]
fn test_force_transfer_to_blocked_address() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 100, &denom, BOB).unwrap();
    env.bank.blocked.insert(CAROL.to_string());
    let before = env.snapshot();

    let err = force_transfer(&mut env, ALICE, 100, &denom, BOB, CAROL).unwrap_err();
    assert_eq!(
        err,
        TokenFactoryError::BlockedAddress {
            address: CAROL.to_string()
        }
    );
    assert_eq!(env.snapshot(), before);
}

#[test]
fn test_force_transfer_restores_sender_when_credit_fails() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 100, &denom, BOB).unwrap();
    env.bank.refuse_credits_to.insert(CAROL.to_string());
    let before = env.snapshot();

    let err = force_transfer(&mut env, ALICE, 60, &denom, BOB, CAROL).unwrap_err();
    assert_matches!(err, TokenFactoryError::Ledger { .. });
    assert_eq!(env.balance(BOB, &denom), 100);
    assert_eq!(env.snapshot(), before);
}

#[test]
fn test_force_transfer_after_admin_relinquished() {
    let mut env = TestEnv::default();
    let denom = env.create_denom(ALICE, "bitcoin").unwrap();
    env.mint_to(ALICE, 100, &denom, BOB).unwrap();
    env.change_admin(ALICE, &denom, "").unwrap();

    let err = force_transfer(&mut env, ALICE, 100, &denom, BOB, CAROL).unwrap_err();
    assert_eq!(err, TokenFactoryError::Unauthorized {});
    assert_eq!(env.balance(BOB, &denom), 100);
}
