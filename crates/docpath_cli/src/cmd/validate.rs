use std::path::PathBuf;

use docpath::doc::{ValidateOptions, ValidationReport, Value, validate};

use crate::cmd::util::{emit_json, load_document, load_rows, select_rows};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub response: PathBuf,
	pub rows: PathBuf,
	#[arg(long)]
	pub row: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Validate the response against each row and fail when any check misses.
pub fn run(args: Args) -> Result<()> {
	let Args { response, rows, row, json } = args;

	let response = load_document(&response)?;
	let rows = select_rows(load_rows(&rows)?, row)?;
	let reports: Vec<ValidationReport> = rows.iter().map(|row| validate(&response, row, &ValidateOptions::default())).collect();

	if json {
		match reports.as_slice() {
			[single] => emit_json(single)?,
			_ => emit_json(&reports)?,
		}
	} else {
		print_reports(&reports);
	}

	let total: usize = reports.iter().map(ValidationReport::len).sum();
	let failed = total - reports.iter().map(ValidationReport::passed_count).sum::<usize>();
	if failed > 0 {
		return Err(CliError::ValidationFailed { failed, total });
	}

	Ok(())
}

fn print_reports(reports: &[ValidationReport]) {
	for (idx, report) in reports.iter().enumerate() {
		report.log_results();
		println!("row {idx}: {}/{} passed", report.passed_count(), report.len());
		for (path, outcome) in report.iter() {
			println!(
				"{}\t{path}\texpected={}\tactual={}\t{}",
				if outcome.matched { "PASS" } else { "FAIL" },
				outcome.expected,
				outcome.actual.as_ref().map_or_else(|| "-".to_owned(), Value::to_string),
				outcome.detail
			);
		}
	}
}
