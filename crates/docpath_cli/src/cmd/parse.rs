use docpath::doc::{FieldPath, PathStep};

use crate::cmd::util::emit_json;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

/// Parse a path expression and print its steps.
pub fn run(args: Args) -> Result<()> {
	let Args { path: input, json } = args;
	let path = FieldPath::parse(&input)?;

	if json {
		return emit_json(&ParseJson {
			input,
			canonical: path.to_string(),
			steps: path.steps().iter().map(StepJson::from).collect(),
		});
	}

	println!("path: {path}");
	println!("steps: {}", path.len());
	println!("idx\tname\tindex");
	for (idx, step) in path.steps().iter().enumerate() {
		match step {
			PathStep::Field(name) => println!("{idx}\t{name}\t-"),
			PathStep::IndexedField(name, index) => println!("{idx}\t{name}\t{index}"),
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct StepJson {
	name: String,
	index: Option<usize>,
}

impl From<&PathStep> for StepJson {
	fn from(step: &PathStep) -> Self {
		match step {
			PathStep::Field(name) => Self { name: name.clone(), index: None },
			PathStep::IndexedField(name, index) => Self {
				name: name.clone(),
				index: Some(*index),
			},
		}
	}
}

#[derive(serde::Serialize)]
struct ParseJson {
	input: String,
	canonical: String,
	steps: Vec<StepJson>,
}
