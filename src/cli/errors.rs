use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid value in input file: {token}. Must be an integer")]
    InvalidToken { token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Factorization error: {0}")]
    Factor(#[from] primefac::Error),
}
