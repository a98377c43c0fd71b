//! Pipeline orchestration and final BV assembly (spec §4.9 / C9, §6).

use rust_decimal::Decimal;

use crate::catalogue::EquipmentCatalogue;
use crate::defensive::DefensiveBVCalculator;
use crate::error::Result;
use crate::heat::HeatEfficiencyModel;
use crate::model::{BVBreakdown, DefensiveDiagnostic, Diagnostics, Unit};
use crate::movement::MovementProfile;
use crate::normalize::UnitNormalizer;
use crate::offensive::OffensiveBVCalculator;
use crate::speed_tonnage::SpeedAndTonnageFactors;
use crate::weapon_order::WeaponOrderer;

/// Pilot gunnery/piloting skill pair, 0..=7 each (§4.9, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PilotSkill {
	pub gunnery: u8,
	pub piloting: u8,
}

/// `calculate`'s recognized options (§6).
#[derive(Debug, Clone, Copy)]
pub struct CalculateOptions {
	pub pilot: Option<PilotSkill>,
	pub diagnostics: bool,
	pub clamp_to_minimum_one: bool,
}

impl Default for CalculateOptions {
	fn default() -> Self {
		Self { pilot: None, diagnostics: false, clamp_to_minimum_one: true }
	}
}

/// Computes BV 2.0 for a single unit (spec §6's `calculate` entry point).
///
/// # Errors
///
/// Returns [`crate::error::BvError::UnsupportedConfiguration`] when the
/// unit's normalization fails (§4.2).
pub fn calculate(unit: &Unit, catalogue: &dyn EquipmentCatalogue, options: CalculateOptions) -> Result<BVBreakdown> {
	let normalizer = UnitNormalizer::new(catalogue);
	let normalized = normalizer.normalize(unit)?;

	let movement = MovementProfile::derive(&unit.movement);
	let defensive = DefensiveBVCalculator::calculate(unit, &normalized, &movement);
	let heat = HeatEfficiencyModel::calculate(unit, &normalized);
	let ordered = WeaponOrderer::order(&normalized);
	let offensive = OffensiveBVCalculator::calculate(unit, &normalized, &ordered, &heat, &movement);
	let speed_tonnage = SpeedAndTonnageFactors::calculate(unit, &movement, offensive.subtotal);

	let base_bv = crate::fixed::round4(defensive.subtotal + speed_tonnage.offensive_subtotal);

	let pilot_multiplier = options.pilot.map_or(Decimal::ONE, pilot_multiplier);
	let scaled = crate::fixed::round4(base_bv * pilot_multiplier);

	let final_bv = if options.clamp_to_minimum_one {
		crate::fixed::round_half_up_to_i64_min1(scaled)
	} else {
		crate::fixed::round_half_up_to_i64(scaled)
	};

	let diagnostics = options.diagnostics.then(|| Diagnostics {
		defensive: DefensiveDiagnostic {
			armor_bv: defensive.armor_bv,
			structure_bv: defensive.structure_bv,
			engine_bv: defensive.engine_bv,
			gyro_bv: defensive.gyro_bv,
			defensive_equipment_bv: defensive.defensive_equipment_bv,
			defensive_factor: defensive.defensive_factor,
		},
		heat_capacity: heat.capacity,
		heat_generation: heat.generation,
		heat_excess: heat.excess,
		weapons: offensive.weapon_diagnostics.clone(),
		ammo: offensive.ammo_diagnostics.clone(),
		physical_bv: offensive.physical_bv,
		electronics_bv: offensive.electronics_bv,
		explosive_penalty: offensive.explosive_penalty,
		speed_factor: speed_tonnage.speed_factor,
		tonnage_factor: speed_tonnage.tonnage_factor,
		pilot_multiplier,
	});

	Ok(BVBreakdown {
		unit_id: unit.display_id(),
		defensive_subtotal: defensive.subtotal,
		offensive_subtotal: speed_tonnage.offensive_subtotal,
		base_bv,
		final_bv,
		reference_bv: None,
		delta_percent: None,
		classification: None,
		warnings: normalized.warnings,
		diagnostics,
	})
}

/// BV 2.0 pilot skill multiplier table, published TechManual §BV 2.0,
/// indexed `[gunnery][piloting]`, each entry ×100 (so `242` means `2.42`).
/// Regular (4, 5) anchors at exactly `1.0` (§8 property 6).
const PILOT_MULTIPLIER_TABLE_X100: [[i64; 8]; 8] = [
	[242, 231, 221, 210, 193, 175, 168, 159],
	[221, 211, 202, 192, 176, 160, 154, 146],
	[193, 184, 176, 168, 154, 140, 135, 128],
	[166, 158, 151, 144, 132, 120, 116, 110],
	[138, 132, 126, 120, 110, 100, 95, 90],
	[131, 119, 113, 108, 99, 90, 86, 81],
	[124, 112, 107, 96, 88, 80, 77, 72],
	[117, 106, 101, 90, 83, 75, 71, 68],
];

fn pilot_multiplier(skill: PilotSkill) -> Decimal {
	let gunnery = (skill.gunnery as usize).min(7);
	let piloting = (skill.piloting as usize).min(7);
	Decimal::new(PILOT_MULTIPLIER_TABLE_X100[gunnery][piloting], 2)
}
