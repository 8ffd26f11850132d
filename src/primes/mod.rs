//! Prime table layer: parsing of the bundled prime lists, validated
//! `PrimeTable` construction, and the process-wide shared table used by
//! the high-level `api` entrypoints.
pub mod table;
pub use table::{PrimeTable, TableError, shared};
