use std::fs;

use primefac::api::get_factors_with_table;
use primefac::{Error, PrimeTable, TableError};

#[test]
fn parses_whitespace_separated_primes_across_sources() {
    let table = PrimeTable::from_sources(&["  A header line\n\n 2 3 5 7\n", " 11 13\n"]).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.last_prime(), 13);
}

#[test]
fn stops_parsing_a_line_at_the_first_non_numeric_token() {
    let table = PrimeTable::from_sources(&["2 3 end of row 5\n7\n"]).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.last_prime(), 7);
}

#[test]
fn empty_data_is_rejected() {
    assert!(matches!(
        PrimeTable::from_sources(&["no numbers here\n"]),
        Err(TableError::Empty)
    ));
}

#[test]
fn non_ascending_data_is_rejected() {
    assert!(matches!(
        PrimeTable::from_vec(vec![2, 5, 3]),
        Err(TableError::NotAscending { value: 3 })
    ));
    assert!(matches!(
        PrimeTable::from_vec(vec![2, 3, 3, 5]),
        Err(TableError::NotAscending { value: 3 })
    ));
}

#[test]
fn primes_below_is_strictly_below() {
    let table = PrimeTable::from_vec(vec![2, 3, 5, 7, 11]).unwrap();
    assert_eq!(table.primes_below(7).unwrap(), &[2, 3, 5]);
    assert_eq!(table.primes_below(8).unwrap(), &[2, 3, 5, 7]);
    assert_eq!(table.primes_below(2).unwrap(), &[] as &[u64]);
}

#[test]
fn primes_below_fails_past_the_largest_prime() {
    let table = PrimeTable::from_vec(vec![2, 3, 5, 7, 11]).unwrap();
    assert!(table.primes_below(11).is_ok());
    assert!(matches!(
        table.primes_below(12),
        Err(Error::OutOfRange { limit: 11, .. })
    ));
}

#[test]
fn small_table_covers_small_values_only() {
    let table = PrimeTable::from_vec(vec![2, 3, 5, 7, 11]).unwrap();
    assert_eq!(
        get_factors_with_table(12, &table).unwrap(),
        vec![1, 2, 3, 4, 6, 12]
    );
    // 13^2: the square-root bound exceeds the table
    assert!(matches!(
        get_factors_with_table(169, &table),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn loads_prime_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("primes1.txt");
    let second = dir.path().join("primes2.txt");
    fs::write(&first, "A header line\n2 3 5\n").unwrap();
    fs::write(&second, "7 11\n").unwrap();

    let table = PrimeTable::from_paths(&[first, second]).unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.last_prime(), 11);
}

#[test]
fn missing_prime_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(
        PrimeTable::from_paths(&[missing]),
        Err(TableError::Io(_))
    ));
}
