//! Bounds for money columns (`NUMERIC(12, 2)`).

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Digits after the decimal point a stored amount may carry.
pub const MONEY_SCALE: u32 = 2;

/// Smallest amount that no longer fits: 10^10.
pub const MONEY_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Reject amounts the store would round or refuse.
pub(crate) fn check_money(field: &str, value: Decimal) -> DomainResult<()> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(DomainError::validation(format!(
            "{field} must have at most {MONEY_SCALE} decimal places"
        )));
    }
    if value.abs() >= MONEY_LIMIT {
        return Err(DomainError::validation(format!("{field} must be less than {MONEY_LIMIT}")));
    }
    Ok(())
}
