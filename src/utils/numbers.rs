use log::{debug, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::utils::errors::UtilsError;

/// Parse an integer (`-3`) or a fraction (`3/4`) into an exact rational.
///
/// # Errors
///
/// Returns an error if the text is not a number or the denominator is zero.
pub fn parse_number(text: &str) -> Result<BigRational, UtilsError> {
    let trimmed = text.trim();
    debug!("Parsing number '{}'", trimmed);

    let (numer, denom) = match trimmed.split_once('/') {
        Some((n, d)) => (n.trim(), d.trim()),
        None => (trimmed, "1"),
    };

    let numer: BigInt = numer
        .parse()
        .map_err(|_| UtilsError::InvalidNumber(trimmed.to_string()))?;
    let denom: BigInt = denom
        .parse()
        .map_err(|_| UtilsError::InvalidNumber(trimmed.to_string()))?;

    if denom.is_zero() {
        warn!("Rejecting fraction with zero denominator: '{}'", trimmed);
        return Err(UtilsError::ZeroDenominator(trimmed.to_string()));
    }

    Ok(BigRational::new(numer, denom))
}

/// # Errors
///
/// Returns the first parse failure.
pub fn parse_numbers<S: AsRef<str>>(texts: &[S]) -> Result<Vec<BigRational>, UtilsError> {
    texts.iter().map(|t| parse_number(t.as_ref())).collect()
}
