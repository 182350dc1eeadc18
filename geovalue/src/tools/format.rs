use super::input::read_documents;
use anyhow::{Context, Result};
use clap::Args;
use geovalue_core::GeoJson;
use log::info;
use std::{fs, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to format, "-" reads from stdin
	#[arg(required = true)]
	input: String,

	/// write to this file instead of stdout
	#[arg(long, short)]
	output: Option<PathBuf>,

	/// indent the output
	#[arg(long, short, conflicts_with = "ndjson")]
	pretty: bool,

	/// read newline-delimited GeoJSON and write one compact document per line
	#[arg(long)]
	ndjson: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let documents = read_documents(&arguments.input, arguments.ndjson)?;
	let text = format_documents(&documents, arguments.pretty);

	match &arguments.output {
		Some(path) => {
			info!("writing {path:?}");
			fs::write(path, text).with_context(|| format!("writing {path:?}"))?;
		}
		None => print!("{text}"),
	}
	Ok(())
}

fn format_documents(documents: &[GeoJson], pretty: bool) -> String {
	documents
		.iter()
		.map(|document| {
			let mut line = if pretty {
				document.to_json_string_pretty()
			} else {
				document.to_json_string()
			};
			line.push('\n');
			line
		})
		.collect()
}
