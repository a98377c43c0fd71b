//! The engine's output type and its diagnostics payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::unit::Location;

/// Firing arc, derived from location + rear-mount flag during
/// normalization (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FiringArc {
	Forward,
	Left,
	Right,
	Rear,
	Torso,
}

/// Validator classification band (spec §4.10 — the finer-grained set used
/// by the validator; [`crate::validate`] is the sole producer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
	Exact,
	Within1Pct,
	Within2Pct,
	Within3_5Pct,
	Within5_10Pct,
	Outside10Pct,
}

impl Classification {
	/// Classify an absolute percent delta (e.g. `2.5` for 2.5%).
	#[must_use]
	pub fn from_delta_percent(delta_percent: Decimal) -> Self {
		let d = delta_percent.abs();
		if d.is_zero() {
			Self::Exact
		} else if d <= Decimal::ONE {
			Self::Within1Pct
		} else if d <= Decimal::from(2) {
			Self::Within2Pct
		} else if d <= Decimal::new(35, 1) {
			Self::Within3_5Pct
		} else if d <= Decimal::from(10) {
			Self::Within5_10Pct
		} else {
			Self::Outside10Pct
		}
	}
}

/// A non-fatal issue recorded against a calculation (spec §7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
	pub equipment_id: String,
	pub location: Option<Location>,
	pub message: String,
}

/// Per-weapon heat-halving and ordering detail, for diagnostics mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDiagnostic {
	pub equipment_id: String,
	pub location: Location,
	pub arc: FiringArc,
	/// Catalogue BV after ordering-stage multipliers (TC/Artemis/PPC cap/
	/// arc/rear-mount), before heat-excess halving.
	pub modified_bv: Decimal,
	/// Final contribution after heat-excess halving, if any.
	pub contributed_bv: Decimal,
	pub halved_for_heat: bool,
}

/// Per-weapon-type ammo-capping detail, for diagnostics mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoDiagnostic {
	pub weapon_type: String,
	pub weapon_bv_total: Decimal,
	pub ammo_bv_raw: Decimal,
	pub ammo_bv_capped: Decimal,
}

/// Defensive-subtotal line items, for diagnostics mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefensiveDiagnostic {
	pub armor_bv: Decimal,
	pub structure_bv: Decimal,
	pub engine_bv: Decimal,
	pub gyro_bv: Decimal,
	pub defensive_equipment_bv: Decimal,
	pub defensive_factor: Decimal,
}

/// Full per-stage breakdown, populated only when
/// [`crate::assemble::CalculateOptions::diagnostics`] is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
	pub defensive: DefensiveDiagnostic,
	pub heat_capacity: Decimal,
	pub heat_generation: Decimal,
	pub heat_excess: Decimal,
	pub weapons: Vec<WeaponDiagnostic>,
	pub ammo: Vec<AmmoDiagnostic>,
	pub physical_bv: Decimal,
	pub electronics_bv: Decimal,
	pub explosive_penalty: Decimal,
	pub speed_factor: Decimal,
	pub tonnage_factor: Decimal,
	pub pilot_multiplier: Decimal,
}

/// The engine's single output type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BVBreakdown {
	pub unit_id: String,
	pub defensive_subtotal: Decimal,
	pub offensive_subtotal: Decimal,
	/// `defensive_subtotal + offensive_subtotal`, before the pilot-skill
	/// multiplier and final rounding (§4.9).
	pub base_bv: Decimal,
	pub final_bv: i64,
	pub reference_bv: Option<i64>,
	pub delta_percent: Option<Decimal>,
	pub classification: Option<Classification>,
	pub warnings: Vec<Warning>,
	pub diagnostics: Option<Diagnostics>,
}
