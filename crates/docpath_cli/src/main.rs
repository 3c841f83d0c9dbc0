#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod cmd;
mod error;

use error::Result;

#[derive(Parser)]
#[command(name = "docpath", about = "Populate and validate JSON documents through flat dot/bracket paths")]
struct Cli {
	/// Log population and validation steps to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a path expression and print its steps.
	Parse(cmd::parse::Args),
	/// Read one path from a JSON document.
	Get(cmd::get::Args),
	/// Fill a JSON template from fixture rows.
	Populate(cmd::populate::Args),
	/// Check a JSON response against `response.` fixture cells.
	Validate(cmd::validate::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
	env_logger::Builder::new().filter_level(level).parse_default_env().format_timestamp(None).init();
}

fn run(command: Commands) -> Result<()> {
	match command {
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Populate(args) => cmd::populate::run(args),
		Commands::Validate(args) => cmd::validate::run(args),
	}
}
