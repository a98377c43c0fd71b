//! Unit-set loading: one JSON file per unit, in a directory.

use std::path::Path;

use bv_core::Unit;

/// Reads every `*.json` file directly under `dir` as a [`Unit`].
///
/// # Errors
///
/// Returns an error if `dir` cannot be read, or any file fails to parse.
pub fn load_units(dir: &Path) -> Result<Vec<Unit>, String> {
	let entries = std::fs::read_dir(dir).map_err(|e| format!("cannot read {dir:?}: {e}"))?;

	let mut units = Vec::new();
	for entry in entries {
		let entry = entry.map_err(|e| format!("cannot read entry in {dir:?}: {e}"))?;
		let path = entry.path();
		if path.extension().is_none_or(|ext| ext != "json") {
			continue;
		}

		let contents =
			std::fs::read_to_string(&path).map_err(|e| format!("cannot read {path:?}: {e}"))?;
		let unit: Unit =
			serde_json::from_str(&contents).map_err(|e| format!("cannot parse {path:?}: {e}"))?;
		units.push(unit);
	}

	units.sort_by(|a, b| a.display_id().cmp(&b.display_id()));
	Ok(units)
}
