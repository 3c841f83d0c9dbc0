use std::path::PathBuf;

use docpath::doc::{PopulateOptions, populate_rows};

use crate::cmd::util::{emit_json, load_document, load_rows, select_rows};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub template: PathBuf,
	pub rows: PathBuf,
	#[arg(long)]
	pub row: Option<usize>,
	#[arg(long = "keep-blank")]
	pub keep_blank: bool,
}

/// Fill the template once per fixture row and print the documents.
///
/// A single selected row prints one document; otherwise an array.
pub fn run(args: Args) -> Result<()> {
	let Args {
		template,
		rows,
		row,
		keep_blank,
	} = args;

	let template = load_document(&template)?;
	let rows = select_rows(load_rows(&rows)?, row)?;
	let options = PopulateOptions {
		skip_blank: !keep_blank,
		..PopulateOptions::default()
	};

	let documents = populate_rows(&template, &rows, &options)?;
	log::debug!("populated {} document(s)", documents.len());

	match documents.as_slice() {
		[single] => emit_json(single),
		_ => emit_json(&documents),
	}
}
