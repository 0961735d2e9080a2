use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("negative amount for {field}: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    #[error("catalog parse failure: {0}")]
    CatalogParse(String),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for engine operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Reject negative monetary inputs at the boundary. Zero is allowed;
/// relative calculations short-circuit instead of dividing by it.
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO {
        return Err(DomainError::NegativeAmount { field, value });
    }
    Ok(())
}
