use cw_tokenfactory_types::{DenomUnit, Metadata, MetadataRules};

use crate::bank::MetadataKeeper;
use crate::denom::FactoryDenom;
use crate::error::TokenFactoryError;

/// Tickers are compared and stored upper case.
pub fn normalize_ticker(ticker: &str) -> String {
    ticker.to_uppercase()
}

pub fn validate_ticker(ticker: &str, rules: &MetadataRules) -> Result<(), TokenFactoryError> {
    if ticker.is_empty() {
        return Err(TokenFactoryError::invalid_ticker(
            ticker,
            "ticker cannot be empty",
        ));
    }

    if ticker.contains('/') {
        return Err(TokenFactoryError::invalid_ticker(
            ticker,
            "ticker cannot contain a / (slash)",
        ));
    }

    if let Some(c) = ticker.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(TokenFactoryError::invalid_ticker(
            ticker,
            format!("ticker can only contain letters and digits, found ({c})"),
        ));
    }

    let lowercase = ticker.to_lowercase();
    if let Some(word) = rules
        .denied_ticker_words
        .iter()
        .find(|word| lowercase.contains(&word.to_lowercase()))
    {
        return Err(TokenFactoryError::invalid_ticker(
            ticker,
            format!("ticker contains a denied word: {word}"),
        ));
    }

    if ticker.chars().count() > rules.max_ticker_length as usize {
        return Err(TokenFactoryError::invalid_ticker(
            ticker,
            format!(
                "ticker cannot be greater than {} characters",
                rules.max_ticker_length
            ),
        ));
    }

    Ok(())
}

pub fn validate_description(
    description: &str,
    rules: &MetadataRules,
) -> Result<(), TokenFactoryError> {
    let len = description.chars().count();
    if len > rules.max_description_length as usize {
        return Err(TokenFactoryError::InvalidDescription {
            reason: format!(
                "description cannot be greater than {} characters: {len}",
                rules.max_description_length
            ),
        });
    }

    if let Some(c) = description
        .chars()
        .find(|c| rules.denied_description_chars.contains(*c))
    {
        return Err(TokenFactoryError::InvalidDescription {
            reason: format!(
                "description cannot contain special characters: {} (found {c})",
                rules.denied_description_chars
            ),
        });
    }

    Ok(())
}

pub fn validate_exponent(exponent: u32, rules: &MetadataRules) -> Result<(), TokenFactoryError> {
    if exponent > rules.max_exponent {
        return Err(TokenFactoryError::InvalidExponent {
            exponent,
            max: rules.max_exponent,
        });
    }
    Ok(())
}

/// Builds the two-unit metadata record for a denom: the base unit at
/// exponent 0 and the ticker at `exponent`, each aliasing the other.
pub fn build_display_metadata(
    denom: &FactoryDenom,
    ticker: &str,
    description: &str,
    exponent: u32,
    rules: &MetadataRules,
) -> Result<Metadata, TokenFactoryError> {
    let ticker = normalize_ticker(ticker);
    validate_ticker(&ticker, rules)?;
    validate_description(description, rules)?;
    validate_exponent(exponent, rules)?;

    Ok(Metadata {
        description: description.to_string(),
        denom_units: vec![
            DenomUnit {
                denom: denom.to_string(),
                // must be 0 for the base denom
                exponent: 0,
                aliases: vec![ticker.clone()],
            },
            DenomUnit {
                denom: ticker.clone(),
                exponent,
                aliases: vec![denom.to_string()],
            },
        ],
        base: denom.to_string(),
        display: denom.to_string(),
        name: denom.to_string(),
        symbol: ticker,
    })
}

/// Validates and stores display metadata, replacing whatever the denom had.
/// Admin checks are the caller's job.
pub fn set_display_metadata(
    keeper: &mut impl MetadataKeeper,
    denom: &FactoryDenom,
    ticker: &str,
    description: &str,
    exponent: u32,
    rules: &MetadataRules,
) -> Result<Metadata, TokenFactoryError> {
    let metadata = build_display_metadata(denom, ticker, description, exponent, rules)?;
    keeper.set_denom_metadata(metadata.clone())?;
    Ok(metadata)
}
