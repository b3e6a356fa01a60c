//! Postal code (PLZ) value object

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// German 5-digit postal code, stored as a string to preserve leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode {
    plz: String,
}

impl PostalCode {
    /// Accepts anything renderable as a string, so numeric and string
    /// input are equivalent: `PostalCode::new(12345)` == `PostalCode::new("12345")`.
    pub fn new(plz: impl ToString) -> DomainResult<Self> {
        let plz = plz.to_string();
        if plz.len() != 5 || !plz.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation("Invalid postal code".into()));
        }
        Ok(Self { plz })
    }

    pub fn plz(&self) -> &str {
        &self.plz
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plz)
    }
}
