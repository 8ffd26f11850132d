//! Shared types used across PRIMEFAC.
//! Currently the report `OutputFormat` consumed by the CLI and suitable for
//! config files.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Plain => "Plain",
            OutputFormat::Json => "Json",
        };
        write!(f, "{}", s)
    }
}
