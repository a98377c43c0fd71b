//! Report serialization and exit-code determination (spec §6).

use std::path::Path;

use bv_core::validate::BVValidationReport;
use rust_decimal::Decimal;

/// Exit codes per spec §6: `0` = all within 1%, `1` = some outside 1%,
/// `2` = input error (handled by the caller before this point).
pub fn exit_code(report: &BVValidationReport) -> i32 {
	if !report.failures.is_empty() {
		return 1;
	}
	if report.within_1pct_fraction() == Decimal::ONE {
		0
	} else {
		1
	}
}

/// Writes `report` as pretty JSON to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn write_report(report: &BVValidationReport, path: &Path) -> Result<(), String> {
	let json = serde_json::to_string_pretty(report).map_err(|e| format!("cannot serialize report: {e}"))?;
	std::fs::write(path, json).map_err(|e| format!("cannot write {path:?}: {e}"))
}
