//! Error types for LanStat

use thiserror::Error;

/// LanStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error: a caller-supplied parameter is outside its
    /// documented domain. Raised before any computation starts.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error: a numerical result left its expected range
    /// (e.g. a quadrature integral came out non-finite).
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let e = Error::Validation("eta must be > 0".into());
        assert!(e.to_string().contains("eta must be > 0"));
        let e = Error::Computation("integral is not finite".into());
        assert!(e.to_string().starts_with("Computation error"));
    }
}
