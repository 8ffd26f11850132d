//! High-level, ergonomic library API: factor values against the shared or an
//! explicit prime table, batch helpers, and report formatting. Prefer these
//! entrypoints over the low-level engine when integrating PRIMEFAC.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::engine::collect_factors;
use crate::error::{Error, Result};
use crate::primes::{self, PrimeTable};

/// A factored value with its complete, ascending list of divisors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factorization {
    pub value: u64,
    pub factors: Vec<u64>,
}

/// Outcome counts of a batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
}

fn validate(n: i64) -> Result<u64> {
    if n <= 0 {
        return Err(Error::InvalidArgument {
            arg: "n",
            value: n.to_string(),
        });
    }
    Ok(n as u64)
}

/// All factors of `n` as a sorted ascending list (including 1 and `n`),
/// using the shared bundled prime table.
pub fn get_factors(n: i64) -> Result<Vec<u64>> {
    get_factors_with_table(n, primes::shared()?)
}

/// All factors of `n` against an explicit prime table. Use this to avoid the
/// process-wide table, e.g. with a larger table loaded from disk.
pub fn get_factors_with_table(n: i64, table: &PrimeTable) -> Result<Vec<u64>> {
    let value = validate(n)?;
    collect_factors(value, table)
}

/// Factor `n` into a serializable report, using the shared table.
pub fn factorize(n: i64) -> Result<Factorization> {
    factorize_with_table(n, primes::shared()?)
}

/// Factor `n` into a serializable report against an explicit table.
pub fn factorize_with_table(n: i64, table: &PrimeTable) -> Result<Factorization> {
    let value = validate(n)?;
    let factors = collect_factors(value, table)?;
    Ok(Factorization { value, factors })
}

/// Factor every value in `values` against the shared table.
///
/// With `continue_on_error`, failures are logged and counted instead of
/// aborting the batch; otherwise the first error propagates.
pub fn factor_all(
    values: &[i64],
    continue_on_error: bool,
) -> Result<(Vec<Factorization>, BatchReport)> {
    let mut results = Vec::with_capacity(values.len());
    let mut report = BatchReport::default();

    for &value in values {
        match factorize(value) {
            Ok(factorization) => {
                report.processed += 1;
                results.push(factorization);
            }
            Err(e) if continue_on_error => {
                warn!("Error factoring {}: {}", value, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok((results, report))
}

/// Fixed textual form of a report: `The factors of <n> are [..]`
pub fn format_report(factorization: &Factorization) -> String {
    format!(
        "The factors of {} are {:?}",
        factorization.value, factorization.factors
    )
}
