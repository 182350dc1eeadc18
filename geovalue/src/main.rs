mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Validate and normalise GeoJSON documents.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Decode GeoJSON documents and print a summary of each
	Check(tools::check::Subcommand),

	#[command(alias = "fmt")]
	/// Decode a GeoJSON document and print it re-encoded
	Format(tools::format::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Check(arguments) => tools::check::run(arguments),
		Commands::Format(arguments) => tools::format::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geovalue"]).unwrap_err().to_string();
		assert!(err.starts_with("Validate and normalise GeoJSON documents."));
		assert!(err.contains("\nUsage: geovalue [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geovalue", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geovalue "));
	}

	#[test]
	fn check_subcommand() {
		let output = run_command(vec!["geovalue", "check"]).unwrap_err().to_string();
		assert!(output.starts_with("Decode GeoJSON documents and print a summary of each"));
	}

	#[test]
	fn format_subcommand() {
		let output = run_command(vec!["geovalue", "format"]).unwrap_err().to_string();
		assert!(output.starts_with("Decode a GeoJSON document and print it re-encoded"));
	}
}
