use cosmwasm_std::{Addr, Coin, DepsMut, MessageInfo, Response};
use cw_tokenfactory_types::Metadata;

use crate::authority::{check_can_register, register_denom, set_admin};
use crate::bank::{BankKeeper, MetadataKeeper};
use crate::denom::FactoryDenom;
use crate::error::TokenFactoryError;
use crate::helpers::{check_funds, check_not_blocked, check_positive, require_admin};
use crate::metadata;
use crate::state::PARAMS;

/// Charges the denom creation fee to the sender and registers
/// `factory/{sender}/{subdenom}` with the sender as admin. Nothing is charged
/// unless the denom can be registered, nothing is registered unless the fee
/// was charged, and a registration that fails after charging refunds the fee.
pub fn create_denom<B>(
    deps: DepsMut,
    bank: &mut B,
    info: MessageInfo,
    subdenom: String,
) -> Result<Response, TokenFactoryError>
where
    B: BankKeeper + MetadataKeeper,
{
    let params = PARAMS.load(deps.storage)?;
    let denom = FactoryDenom::new(info.sender.as_str(), &subdenom, params.max_subdenom_length)?;
    check_can_register(deps.storage, &*bank, &denom, &info.sender, &params)?;

    let fee = &params.denom_creation_fee;
    if !fee.is_empty() {
        for coin in fee {
            check_funds(&*bank, &info.sender, coin)?;
        }
        bank.charge_fee(&info.sender, fee)?;
    }

    if let Err(err) = register_denom(
        deps.storage,
        &mut *bank,
        &denom,
        &info.sender,
        info.sender.as_str(),
    ) {
        // hand the fee back, the denom was not created
        for coin in fee {
            bank.credit(&info.sender, coin)?;
        }
        return Err(err);
    }

    Ok(Response::new()
        .add_attribute("action", "create_denom")
        .add_attribute("creator", info.sender)
        .add_attribute("subdenom", subdenom)
        .add_attribute("new_token_denom", denom.to_string())
        .add_attribute("fee", format_coins(fee)))
}

/// Mint to the sender.
pub fn mint(
    deps: DepsMut,
    bank: &mut impl BankKeeper,
    info: MessageInfo,
    amount: Coin,
) -> Result<Response, TokenFactoryError> {
    let to_address = info.sender.clone();
    mint_to(deps, bank, info, amount, to_address)
}

pub fn mint_to(
    deps: DepsMut,
    bank: &mut impl BankKeeper,
    info: MessageInfo,
    amount: Coin,
    to_address: Addr,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &amount.denom, &info.sender)?;
    check_positive(&amount)?;
    check_not_blocked(&*bank, &to_address)?;

    bank.credit(&to_address, &amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("to", to_address)
        .add_attribute("amount", amount.to_string()))
}

/// Burn from the sender's own balance.
pub fn burn(
    deps: DepsMut,
    bank: &mut impl BankKeeper,
    info: MessageInfo,
    amount: Coin,
) -> Result<Response, TokenFactoryError> {
    let from_address = info.sender.clone();
    burn_from(deps, bank, info, amount, from_address)
}

/// Burn from any address. The admin does not need to hold the tokens.
pub fn burn_from(
    deps: DepsMut,
    bank: &mut impl BankKeeper,
    info: MessageInfo,
    amount: Coin,
    from_address: Addr,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &amount.denom, &info.sender)?;
    check_positive(&amount)?;
    check_not_blocked(&*bank, &from_address)?;
    check_funds(&*bank, &from_address, &amount)?;

    bank.debit(&from_address, &amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("burner", info.sender)
        .add_attribute("burn_from_address", from_address)
        .add_attribute("amount", amount.to_string()))
}

pub fn force_transfer(
    deps: DepsMut,
    bank: &mut impl BankKeeper,
    info: MessageInfo,
    amount: Coin,
    from_address: Addr,
    to_address: Addr,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &amount.denom, &info.sender)?;
    check_positive(&amount)?;
    check_not_blocked(&*bank, &from_address)?;
    check_not_blocked(&*bank, &to_address)?;
    check_funds(&*bank, &from_address, &amount)?;

    bank.send(&from_address, &to_address, &amount)?;

    Ok(Response::new()
        .add_attribute("action", "force_transfer")
        .add_attribute("from_address", from_address)
        .add_attribute("to_address", to_address)
        .add_attribute("amount", amount.to_string()))
}

/// Hands the admin role over. Checked against the current admin; an empty
/// `new_admin` gives the role up for good.
pub fn change_admin(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    new_admin: String,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &denom, &info.sender)?;

    let new_admin = if new_admin.is_empty() {
        new_admin
    } else {
        deps.api.addr_validate(&new_admin)?.into_string()
    };
    set_admin(deps.storage, &denom, &new_admin)?;

    Ok(Response::new()
        .add_attribute("action", "change_admin")
        .add_attribute("denom", denom)
        .add_attribute("new_admin", new_admin))
}

pub fn set_display_metadata(
    deps: DepsMut,
    keeper: &mut impl MetadataKeeper,
    info: MessageInfo,
    denom: String,
    ticker: String,
    description: String,
    exponent: u32,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &denom, &info.sender)?;
    let denom = FactoryDenom::parse(&denom)?;

    let params = PARAMS.load(deps.storage)?;
    let metadata = metadata::set_display_metadata(
        keeper,
        &denom,
        &ticker,
        &description,
        exponent,
        &params.metadata,
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_display_metadata")
        .add_attribute("denom", denom.to_string())
        .add_attribute("symbol", metadata.symbol)
        .add_attribute("exponent", exponent.to_string()))
}

/// Replaces the bank metadata of `metadata.base` with an arbitrary, but
/// structurally valid, record.
pub fn set_denom_metadata(
    deps: DepsMut,
    keeper: &mut impl MetadataKeeper,
    info: MessageInfo,
    metadata: Metadata,
) -> Result<Response, TokenFactoryError> {
    require_admin(deps.storage, &metadata.base, &info.sender)?;
    metadata
        .validate()
        .map_err(|err| TokenFactoryError::InvalidMetadata {
            reason: err.to_string(),
        })?;

    let denom = metadata.base.clone();
    keeper.set_denom_metadata(metadata)?;

    Ok(Response::new()
        .add_attribute("action", "set_denom_metadata")
        .add_attribute("denom", denom))
}

fn format_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
