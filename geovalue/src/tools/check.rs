use super::input::read_each_document;
use anyhow::{Context, Result, ensure};
use clap::Args;
use geovalue_core::{CompositeTrait, GeoJson};
use log::error;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON files to check, "-" reads from stdin
	#[arg(required = true, num_args = 1..)]
	inputs: Vec<String>,

	/// read newline-delimited GeoJSON, one document per line
	#[arg(long)]
	ndjson: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut checked = 0;
	let mut failed = 0;
	for input in &arguments.inputs {
		for report in check_input(input, arguments.ndjson) {
			checked += 1;
			match report {
				Ok(line) => println!("{line}"),
				Err(e) => {
					error!("{e:#}");
					failed += 1;
				}
			}
		}
	}
	ensure!(failed == 0, "{failed} of {checked} document(s) failed the check");
	Ok(())
}

/// One summary line or one error per document of `input`.
///
/// ndjson documents are labelled `<input>:<line>` with the source line number.
fn check_input(input: &str, ndjson: bool) -> Vec<Result<String>> {
	let documents = match read_each_document(input, ndjson) {
		Ok(documents) => documents,
		Err(e) => return vec![Err(e)],
	};
	documents
		.into_iter()
		.map(|(line, result)| {
			let label = match line {
				Some(line) => format!("{input}:{line}"),
				None => input.to_owned(),
			};
			result
				.map(|document| format!("{label}: {}", describe(&document)))
				.with_context(|| label)
		})
		.collect()
}

/// One-line description: the type tag and the size of its payload.
fn describe(document: &GeoJson) -> String {
	let summary = match document {
		GeoJson::Point(g) => plural(g.len(), "coordinate"),
		GeoJson::MultiPoint(g) => plural(g.len(), "point"),
		GeoJson::LineString(g) => plural(g.len(), "point"),
		GeoJson::MultiLineString(g) => plural(g.len(), "line string"),
		GeoJson::Polygon(g) => plural(g.len(), "ring"),
		GeoJson::MultiPolygon(g) => plural(g.len(), "polygon"),
		GeoJson::GeometryCollection(g) => plural(g.len(), "geometry"),
		GeoJson::Feature(f) => match f.geometry() {
			Some(geometry) => format!("{} geometry", geometry.geojson_type()),
			None => "no geometry".to_string(),
		},
		GeoJson::FeatureCollection(f) => plural(f.len(), "feature"),
	};
	format!("{} ({summary})", document.geojson_type())
}

fn plural(count: usize, noun: &str) -> String {
	match (count, noun) {
		(1, _) => format!("1 {noun}"),
		(_, "geometry") => format!("{count} geometries"),
		_ => format!("{count} {noun}s"),
	}
}
