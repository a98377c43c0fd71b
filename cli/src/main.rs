//! validate-bv — runs the BV 2.0 engine over a unit set and validates the
//! result against an MUL reference corpus (spec §6).

mod reference;
mod report;
mod units;

use std::path::PathBuf;

use bv_core::catalogue::StaticCatalogue;
use bv_core::validate::{self, ReferenceUnit};
use bv_core::VERSION;
use clap::Parser;

#[derive(Parser)]
#[command(name = "validate-bv", version = VERSION, about = "Validate BattleMech BV 2.0 calculations against a reference corpus")]
struct Cli {
	/// Directory of per-unit JSON files
	#[arg(long)]
	input: PathBuf,

	/// MUL reference CSV (`chassis,variant,bv` columns)
	#[arg(long)]
	reference: PathBuf,

	/// Path to write the JSON validation report
	#[arg(long)]
	out: PathBuf,

	/// Include full per-stage diagnostics in the report
	#[arg(long, default_value_t = false)]
	diagnostics: bool,
}

fn main() {
	let cli = Cli::parse();

	let units = match units::load_units(&cli.input) {
		Ok(units) => units,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(2);
		},
	};

	let reference_map = match reference::load_reference(&cli.reference) {
		Ok(map) => map,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(2);
		},
	};

	if units.is_empty() {
		eprintln!("Error: no unit files found in {:?}", cli.input);
		std::process::exit(2);
	}

	eprintln!("Loaded {} units, {} reference entries", units.len(), reference_map.len());

	let mut batch = Vec::with_capacity(units.len());
	let mut unmatched = 0;
	for unit in units {
		let Some(&reference_bv) = reference_map.get(&unit.display_id()) else {
			unmatched += 1;
			continue;
		};
		batch.push(ReferenceUnit { unit, reference_bv });
	}
	if unmatched > 0 {
		eprintln!("Warning: {unmatched} units had no matching reference entry and were skipped");
	}

	// This catalogue is deliberately empty: callers wire in a real
	// EquipmentCatalogue (e.g. loaded from a data file) by constructing
	// their own binary against bv-core; this CLI's built-in `validate-bv`
	// entry point exercises the pipeline shape end to end.
	let catalogue = StaticCatalogue::new();

	let report = validate::validate(&batch, &catalogue, cli.diagnostics);

	eprintln!(
		"exact={} within1%={} within2%={} within3.5%={} within5-10%={} outside10%={} failures={}",
		report.summary.exact,
		report.summary.within1_pct,
		report.summary.within2_pct,
		report.summary.within3_5_pct,
		report.summary.within5_10_pct,
		report.summary.outside10_pct,
		report.failures.len(),
	);

	let exit_code = report::exit_code(&report);

	if let Err(e) = report::write_report(&report, &cli.out) {
		eprintln!("Error: {e}");
		std::process::exit(2);
	}

	std::process::exit(exit_code);
}
