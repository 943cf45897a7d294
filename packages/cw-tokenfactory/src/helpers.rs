use cosmwasm_std::{Addr, Coin, Storage};

use crate::authority::load_denom;
use crate::bank::BankKeeper;
use crate::error::TokenFactoryError;
use crate::state::FactoryDenomInfo;

/// Passes only if `denom` was registered through the registry and `signer` is
/// its current admin. A relinquished (empty) admin matches nobody.
pub fn require_admin(
    storage: &dyn Storage,
    denom: &str,
    signer: &Addr,
) -> Result<FactoryDenomInfo, TokenFactoryError> {
    let info = load_denom(storage, denom)?;
    let admin = &info.authority_metadata;
    if admin.is_relinquished() || admin.admin != signer.as_str() {
        Err(TokenFactoryError::Unauthorized {})
    } else {
        Ok(info)
    }
}

pub fn check_positive(amount: &Coin) -> Result<(), TokenFactoryError> {
    if amount.amount.is_zero() {
        Err(TokenFactoryError::ZeroAmount {})
    } else {
        Ok(())
    }
}

pub fn check_not_blocked(bank: &impl BankKeeper, address: &Addr) -> Result<(), TokenFactoryError> {
    if bank.is_blocked(address) {
        Err(TokenFactoryError::BlockedAddress {
            address: address.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Fails with `InsufficientFunds` unless `address` holds at least `coin`.
pub fn check_funds(
    bank: &impl BankKeeper,
    address: &Addr,
    coin: &Coin,
) -> Result<(), TokenFactoryError> {
    let balance = bank.balance(address, &coin.denom);
    if balance < coin.amount {
        return Err(TokenFactoryError::InsufficientFunds {
            address: address.to_string(),
            denom: coin.denom.clone(),
            balance,
            needed: coin.amount,
        });
    }
    Ok(())
}
