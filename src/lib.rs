#![doc = r#"
PRIMEFAC — divisor factorization backed by a precomputed prime table.

This crate computes the set of integer factors (divisors) of a positive
integer by recursively splitting it with trial division against an ascending
table of primes. It powers the PRIMEFAC CLI and can be embedded in your own
Rust applications.

Coverage
--------
Correctness is bounded by the largest prime in the loaded table: the square
root of the input must not exceed it. The bundled table holds all primes
below 100 000, which covers inputs up to roughly 10^10. Larger tables in the
same text format can be loaded from disk and passed in explicitly.

Quick start: factor a value
---------------------------
```rust
fn main() -> primefac::Result<()> {
    let factors = primefac::get_factors(12)?;
    assert_eq!(factors, vec![1, 2, 3, 4, 6, 12]);
    Ok(())
}
```

Explicit prime table (no shared state)
--------------------------------------
```rust
use primefac::{PrimeTable, get_factors_with_table};

fn main() -> primefac::Result<()> {
    let table = PrimeTable::embedded()?;
    let factors = get_factors_with_table(1_000_000, &table)?;
    assert_eq!(factors.len(), 49);
    Ok(())
}
```

Serializable reports and batch helpers
--------------------------------------
```rust
use primefac::{factor_all, factorize, format_report};

fn main() -> primefac::Result<()> {
    let report = factorize(36)?;
    assert_eq!(format_report(&report), "The factors of 36 are [1, 2, 3, 4, 6, 9, 12, 18, 36]");

    let (results, batch) = factor_all(&[12, 35, 97], true)?;
    assert_eq!(results.len(), 3);
    assert_eq!(batch.errors, 0);
    Ok(())
}
```

Error handling
--------------
All public functions return `primefac::Result<T>`; match on `primefac::Error`
to handle specific cases. Errors are raised immediately and there is no retry
logic: a non-positive input is an `InvalidArgument`, and an input whose square
root exceeds the largest loaded prime is an `OutOfRange`.

```rust
use primefac::{Error, get_factors};

fn main() {
    match get_factors(0) {
        Ok(factors) => println!("{factors:?}"),
        Err(Error::InvalidArgument { arg, value }) => eprintln!("bad {arg}: {value}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`primes`] — the `PrimeTable` and its loading/queries.
- [`types`] — shared enums (e.g. `OutputFormat`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod primes;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use primes::{PrimeTable, TableError};
pub use types::OutputFormat;

// High-level API re-exports
pub use api::{
    BatchReport, Factorization, factor_all, factorize, factorize_with_table, format_report,
    get_factors, get_factors_with_table,
};
