use std::fs;
use std::path::Path;

use tracing::info;

use primefac::api::factor_all;
use primefac::format_report;
use primefac::types::OutputFormat;

use super::args::{CliArgs, SAMPLE_VALUE};
use super::errors::AppError;

fn read_values_file(path: &Path) -> Result<Vec<i64>, AppError> {
    let contents = fs::read_to_string(path)?;
    let mut values = Vec::new();
    for token in contents.split_whitespace() {
        let value = token.parse::<i64>().map_err(|_| AppError::InvalidToken {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mut values = args.values.clone();
    let batch_mode = args.input.is_some();

    if let Some(input) = &args.input {
        info!("Reading values from: {:?}", input);
        values.extend(read_values_file(input)?);
    }

    if values.is_empty() {
        values.push(SAMPLE_VALUE);
    }

    let (results, report) = factor_all(&values, args.continue_on_error)?;

    match args.format {
        OutputFormat::Plain => {
            for factorization in &results {
                println!("{}", format_report(factorization));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    if batch_mode || args.continue_on_error {
        info!("Batch complete!");
        info!("Processed: {}", report.processed);
        info!("Errors: {}", report.errors);
    }

    Ok(())
}
