use std::path::PathBuf;

use docpath::doc::{FieldPath, Probe, Value, probe_path};

use crate::cmd::util::{emit_json, load_document};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

/// Read one path from a JSON document. Absence is reported, not an error.
pub fn run(args: Args) -> Result<()> {
	let Args { file, path: input, json } = args;
	let path = FieldPath::parse(&input)?;
	let document = load_document(&file)?;
	let probe = probe_path(&document, &path);

	if json {
		let payload = match &probe {
			Probe::Found(value) => GetJson {
				path: input,
				found: true,
				value: Some(*value),
				reason: None,
			},
			Probe::Absent(absent) => GetJson {
				path: input,
				found: false,
				value: None,
				reason: Some(absent.to_string()),
			},
		};
		return emit_json(&payload);
	}

	match probe {
		Probe::Found(value) => println!("{value}"),
		Probe::Absent(absent) => println!("absent: {absent}"),
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	path: String,
	found: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<&'a Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	reason: Option<String>,
}
