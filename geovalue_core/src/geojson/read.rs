use crate::GeoJson;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::io::{BufRead, Read};

/// Parses GeoJSON text into a [`GeoJson`] value.
pub fn parse_geojson(text: &str) -> Result<GeoJson> {
	let json: Value = serde_json::from_str(text).context("parsing JSON")?;
	GeoJson::decode_detailed(&json)
}

/// Reads a single GeoJSON document from `reader`.
pub fn read_geojson(reader: impl Read) -> Result<GeoJson> {
	let json: Value = serde_json::from_reader(reader).context("parsing JSON")?;
	GeoJson::decode_detailed(&json)
}

fn process_line(line: std::io::Result<String>) -> Option<Result<GeoJson>> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some(parse_geojson(&line)),
		Err(e) => Some(Err(anyhow!(e))),
	}
}

/// Reads newline-delimited GeoJSON and pairs each document with its 1-based line number.
///
/// Blank lines are skipped but still counted.
pub fn read_ndgeojson_lines(reader: impl BufRead) -> impl Iterator<Item = (usize, Result<GeoJson>)> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line).map(|result| (index + 1, result)))
}

/// Reads newline-delimited GeoJSON, one document per line. Blank lines are skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoJson>> {
	read_ndgeojson_lines(reader).map(|(line, result)| result.with_context(|| format!("line {line}")))
}
