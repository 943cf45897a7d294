/// Longest native denom the bank accepts.
pub const MAX_DENOM_LENGTH: usize = 128;

/// Follows cosmos SDK validation logic. Specifically, the regex
/// string `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
///
/// <https://github.com/cosmos/cosmos-sdk/blob/7728516abfab950dc7a9120caad4870f1f962df5/types/coin.go#L865-L867>
pub fn validate_native_denom(denom: &str) -> Result<(), String> {
    if denom.len() < 3 || denom.len() > MAX_DENOM_LENGTH {
        return Err(format!(
            "invalid native denom. length must be between in [3, {MAX_DENOM_LENGTH}], got ({})",
            denom.len()
        ));
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err("expected alphabetic ascii character in native denomination".to_string()),
    }
    for c in chars {
        if !(c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
            return Err(format!("invalid character ({c}) in native denom"));
        }
    }
    Ok(())
}
