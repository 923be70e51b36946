use std::fmt;

use thiserror::Error;

/// Every reason a pet record was rejected, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct PetValidationError {
    pub reasons: Vec<String>,
}

impl PetValidationError {
    pub fn new(reasons: Vec<String>) -> Self {
        Self { reasons }
    }
}

impl fmt::Display for PetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reasons.join("\n"))
    }
}
