use std::collections::{BTreeSet, HashSet};

use crate::error::{Error, Result};
use crate::primes::PrimeTable;

/// Collect every factor of `n` into a sorted ascending list.
///
/// Callers validate that `n` is positive; this engine only requires table
/// coverage: `isqrt(n) + 1` must not exceed the largest loaded prime.
pub fn collect_factors(n: u64, table: &PrimeTable) -> Result<Vec<u64>> {
    let mut factors = BTreeSet::new();
    let mut visited = HashSet::new();
    split_value(n, table, &mut visited, &mut factors)?;
    Ok(factors.into_iter().collect())
}

/// Recursive step: emit 1 and `m`, then split `m` on every prime divisor
/// below its square-root bound, recursing into both halves of each split.
/// The visited set skips subproblems already processed in this call, which
/// also covers the repeated cofactor of a perfect square.
fn split_value(
    m: u64,
    table: &PrimeTable,
    visited: &mut HashSet<u64>,
    factors: &mut BTreeSet<u64>,
) -> Result<()> {
    if !visited.insert(m) {
        return Ok(());
    }

    let bound = m.isqrt() + 1;
    if bound > table.last_prime() {
        return Err(Error::OutOfRange {
            value: m,
            limit: table.last_prime(),
        });
    }

    factors.insert(1);
    factors.insert(m);

    for &prime in table.primes_below(bound)?.iter().rev() {
        if m % prime == 0 {
            split_value(prime, table, visited, factors)?;
            split_value(m / prime, table, visited, factors)?;
        }
    }

    Ok(())
}
