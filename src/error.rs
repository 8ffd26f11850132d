//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying prime-table errors, and provides semantic variants for
//! argument validation and table-coverage failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Prime table error: {0}")]
    Table(#[from] crate::primes::TableError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error(
        "Value out of range: {value}. The prime table (largest prime: {limit}) cannot guarantee a complete factorization"
    )]
    OutOfRange { value: u64, limit: u64 },
}
