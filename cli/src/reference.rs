//! MUL reference-corpus loading: a CSV of `chassis,variant,bv` rows.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReferenceRow {
	chassis: String,
	variant: String,
	bv: i64,
}

/// Loads a reference CSV into a map keyed by `"{chassis} {variant}"`,
/// matching [`bv_core::Unit::display_id`].
///
/// # Errors
///
/// Returns an error if `path` cannot be read or any row fails to parse.
pub fn load_reference(path: &Path) -> Result<HashMap<String, i64>, String> {
	let mut reader = csv::Reader::from_path(path).map_err(|e| format!("cannot open {path:?}: {e}"))?;

	let mut reference = HashMap::new();
	for result in reader.deserialize() {
		let row: ReferenceRow = result.map_err(|e| format!("cannot parse row in {path:?}: {e}"))?;
		reference.insert(format!("{} {}", row.chassis, row.variant), row.bv);
	}

	Ok(reference)
}
