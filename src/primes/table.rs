use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::info;

/// Bundled prime lists, ascending across files. Derived from the published
/// "small prime lists" (<https://t5k.org/lists/small/>), trimmed to the
/// primes below 100 000.
const EMBEDDED_SOURCES: [&str; 2] = [
    include_str!("../../resources/primes1.txt"),
    include_str!("../../resources/primes2.txt"),
];

/// Errors encountered when loading a prime table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prime table data contains no primes")]
    Empty,

    #[error("Prime table data is not strictly ascending at value {value}")]
    NotAscending { value: u64 },
}

/// Ascending table of distinct primes, immutable after construction.
#[derive(Debug, Clone)]
pub struct PrimeTable {
    primes: Vec<u64>,
}

impl PrimeTable {
    /// Parse whitespace-separated primes from text sources, in order.
    ///
    /// Within a line, tokens are parsed until the first non-numeric token and
    /// the rest of the line is skipped. This tolerates the header lines the
    /// published prime lists carry.
    pub fn from_sources(sources: &[&str]) -> Result<Self, TableError> {
        let mut primes = Vec::new();
        for source in sources {
            for line in source.lines() {
                for token in line.split_whitespace() {
                    match token.parse::<u64>() {
                        Ok(p) => primes.push(p),
                        Err(_) => break,
                    }
                }
            }
        }
        Self::from_vec(primes)
    }

    /// Load prime files from disk, same format as the bundled resources.
    /// Files must be given in ascending numeric order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, TableError> {
        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            contents.push(fs::read_to_string(path)?);
        }
        let sources: Vec<&str> = contents.iter().map(String::as_str).collect();
        Self::from_sources(&sources)
    }

    /// Build from an already-parsed list. Validates the table invariant:
    /// non-empty, strictly ascending, no duplicates.
    pub fn from_vec(primes: Vec<u64>) -> Result<Self, TableError> {
        if primes.is_empty() {
            return Err(TableError::Empty);
        }
        for pair in primes.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TableError::NotAscending { value: pair[1] });
            }
        }
        Ok(Self { primes })
    }

    /// Table built from the bundled resource files.
    pub fn embedded() -> Result<Self, TableError> {
        let table = Self::from_sources(&EMBEDDED_SOURCES)?;
        info!(
            "Loaded {} primes, largest: {}",
            table.len(),
            table.last_prime()
        );
        Ok(table)
    }

    /// All primes strictly less than `bound`, ascending. Fails once `bound`
    /// exceeds the largest loaded prime: completeness above the table cannot
    /// be guaranteed.
    pub fn primes_below(&self, bound: u64) -> crate::Result<&[u64]> {
        if bound > self.last_prime() {
            return Err(crate::Error::OutOfRange {
                value: bound,
                limit: self.last_prime(),
            });
        }
        let end = self.primes.partition_point(|&p| p < bound);
        Ok(&self.primes[..end])
    }

    /// Largest prime in the table.
    pub fn last_prime(&self) -> u64 {
        // Invariant: the table is never empty
        self.primes[self.primes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }
}

static SHARED: OnceCell<PrimeTable> = OnceCell::new();

/// Process-wide table, loaded from the bundled resources on first use and
/// never mutated after.
pub fn shared() -> crate::Result<&'static PrimeTable> {
    SHARED.get_or_try_init(|| PrimeTable::embedded().map_err(crate::Error::from))
}
