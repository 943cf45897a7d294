use cosmwasm_std::{Addr, Coin, StdResult, Uint128};
use cw_tokenfactory_types::Metadata;
use thiserror::Error;

/// Failures reported by the balance ledger.
#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("insufficient funds: {address} holds {balance}{denom}, {needed}{denom} needed")]
    InsufficientFunds {
        address: String,
        denom: String,
        balance: Uint128,
        needed: Uint128,
    },

    #[error("{reason}")]
    Failure { reason: String },
}

impl LedgerError {
    pub fn failure(reason: impl Into<String>) -> Self {
        LedgerError::Failure {
            reason: reason.into(),
        }
    }
}

/// The balance ledger the registry mints into, burns from and charges fees
/// through. The registry never keeps balances itself.
///
/// Implementations must leave the ledger untouched when a single `credit` or
/// `debit` fails. The provided `send` and `charge_fee` build on that to undo
/// their own earlier steps.
pub trait BankKeeper {
    fn balance(&self, address: &Addr, denom: &str) -> Uint128;

    /// Increase the balance of `address`, growing the supply of `coin.denom`.
    fn credit(&mut self, address: &Addr, coin: &Coin) -> Result<(), LedgerError>;

    /// Decrease the balance of `address`, shrinking the supply of `coin.denom`.
    fn debit(&mut self, address: &Addr, coin: &Coin) -> Result<(), LedgerError>;

    /// Module accounts and other addresses the bank refuses to move factory
    /// tokens into or out of.
    fn is_blocked(&self, _address: &Addr) -> bool {
        false
    }

    /// Move `coin` from `from` to `to`. A failed credit puts the debited
    /// amount back.
    fn send(&mut self, from: &Addr, to: &Addr, coin: &Coin) -> Result<(), LedgerError> {
        self.debit(from, coin)?;
        if let Err(err) = self.credit(to, coin) {
            self.credit(from, coin)?;
            return Err(err);
        }
        Ok(())
    }

    /// Collect the denom creation fee from `payer`. The default burns it;
    /// chains that route fees to a pool override this. Coins charged before
    /// a failing coin are returned to the payer.
    fn charge_fee(&mut self, payer: &Addr, fee: &[Coin]) -> Result<(), LedgerError> {
        for (charged, coin) in fee.iter().enumerate() {
            if let Err(err) = self.debit(payer, coin) {
                for refund in &fee[..charged] {
                    self.credit(payer, refund)?;
                }
                return Err(err);
            }
        }
        Ok(())
    }
}

/// The bank's denom metadata store.
pub trait MetadataKeeper {
    fn denom_metadata(&self, denom: &str) -> Option<Metadata>;

    fn set_denom_metadata(&mut self, metadata: Metadata) -> StdResult<()>;
}
