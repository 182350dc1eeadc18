use anyhow::{Context, Result};
use geovalue_core::{GeoJson, read_geojson, read_ndgeojson_iter, read_ndgeojson_lines};
use log::info;
use std::{
	fs::File,
	io::{BufRead, BufReader, stdin},
};

/// Name that selects standard input instead of a file.
pub const STDIN: &str = "-";

fn open(input: &str) -> Result<Box<dyn BufRead>> {
	if input == STDIN {
		info!("reading from stdin");
		return Ok(Box::new(stdin().lock()));
	}
	let file = File::open(input).with_context(|| format!("opening {input:?}"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Reads one GeoJSON document, or one per line if `ndjson` is set.
pub fn read_documents(input: &str, ndjson: bool) -> Result<Vec<GeoJson>> {
	let reader = open(input)?;
	let documents = if ndjson {
		read_ndgeojson_iter(reader).collect::<Result<Vec<_>>>()
	} else {
		read_geojson(reader).map(|document| vec![document])
	};
	let documents = documents.with_context(|| format!("reading {input:?}"))?;
	info!("read {} document(s) from {input:?}", documents.len());
	Ok(documents)
}

/// Decodes every document on its own, so one invalid document does not hide the others.
///
/// Each result carries the source line for ndjson input. Only failing to open
/// the input is an error of the whole call.
pub fn read_each_document(input: &str, ndjson: bool) -> Result<Vec<(Option<usize>, Result<GeoJson>)>> {
	let reader = open(input)?;
	Ok(if ndjson {
		read_ndgeojson_lines(reader)
			.map(|(line, result)| (Some(line), result))
			.collect()
	} else {
		vec![(None, read_geojson(reader))]
	})
}
