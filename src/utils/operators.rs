use log::{debug, warn};

use crate::expression::Operator;
use crate::utils::errors::UtilsError;

/// Parse a string of operator symbols such as `"+-*/"` into a set.
///
/// Repeated symbols are kept once, in order of first appearance. Whitespace
/// and commas are ignored.
///
/// # Errors
///
/// Returns an error on an unknown symbol or when no operator is given.
pub fn parse_operators(symbols: &str) -> Result<Vec<Operator>, UtilsError> {
    debug!("Parsing operator set '{}'", symbols);

    let mut operators = Vec::new();
    for symbol in symbols.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let op = Operator::from_symbol(symbol).ok_or_else(|| {
            warn!("Unknown operator symbol '{}'", symbol);
            UtilsError::UnknownOperator(symbol)
        })?;
        if !operators.contains(&op) {
            operators.push(op);
        }
    }

    if operators.is_empty() {
        return Err(UtilsError::EmptyOperatorSet);
    }
    Ok(operators)
}
