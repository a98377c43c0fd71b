//! Defensive BV subtotal (spec §4.4 / C4).
//!
//! Grounded on the shape of fcsgen's `ballistic.rs` table-driven physics
//! helpers: a free function per published constant table, summed by a
//! single `calculate` entry point.

use rust_decimal::Decimal;

use crate::model::{EngineType, EquipmentCategory, GyroType, Location, StructureType, Unit};
use crate::movement::MovementProfile;
use crate::normalize::NormalizedUnit;

/// Defensive-subtotal line items, mirroring [`crate::model::DefensiveDiagnostic`].
#[derive(Debug, Clone, Copy)]
pub struct DefensiveBreakdown {
	pub armor_bv: Decimal,
	pub structure_bv: Decimal,
	pub engine_bv: Decimal,
	pub gyro_bv: Decimal,
	pub defensive_equipment_bv: Decimal,
	pub defensive_factor: Decimal,
	/// `(armor + structure + engine + gyro + defensive_equipment) × factor`.
	pub subtotal: Decimal,
}

/// Computes the defensive BV subtotal (§4.4).
pub struct DefensiveBVCalculator;

impl DefensiveBVCalculator {
	#[must_use]
	pub fn calculate(
		unit: &Unit,
		normalized: &NormalizedUnit,
		movement: &MovementProfile,
	) -> DefensiveBreakdown {
		let armor_bv = armor_line(unit);
		let structure_bv = structure_line(unit);
		let engine_bv = engine_line(unit);
		let gyro_bv = gyro_line(unit);
		let defensive_equipment_bv = defensive_equipment_line(normalized);

		let defensive_factor = defensive_factor(movement);

		let lines = armor_bv + structure_bv + engine_bv + gyro_bv + defensive_equipment_bv;
		let subtotal = crate::fixed::round4(lines * defensive_factor);

		DefensiveBreakdown {
			armor_bv,
			structure_bv,
			engine_bv,
			gyro_bv,
			defensive_equipment_bv,
			defensive_factor,
			subtotal,
		}
	}
}

/// Per-point armor multiplier (published TechManual §BV 2.0 table).
fn armor_type_multiplier(armor_type: crate::model::ArmorType) -> Decimal {
	use crate::model::ArmorType::{FerroFibrous, HeavyFerroFibrous, LightFerroFibrous, Standard, Stealth};
	match armor_type {
		Standard => Decimal::ONE,
		FerroFibrous => Decimal::new(12, 1),
		HeavyFerroFibrous => Decimal::new(124, 2),
		LightFerroFibrous => Decimal::new(106, 2),
		Stealth => Decimal::new(12, 1),
	}
}

/// Rear-armor weight relative to front armor, by location (§4.4's
/// location-weighting note): center-torso rear is the rarest hit location
/// and is weighted lowest; other rear locations sit at the usual half
/// weight. See SPEC_FULL.md's Open Question resolutions for the reasoning.
fn rear_armor_weight(location: Location) -> Decimal {
	if location == Location::CenterTorso {
		Decimal::new(25, 2)
	} else {
		Decimal::new(5, 1)
	}
}

/// Weighted Σ armor points: front points count at full value; rear points
/// count at [`rear_armor_weight`]'s reduced per-location value (§4.4).
fn weighted_armor_points(unit: &Unit) -> Decimal {
	unit.armor
		.by_location
		.iter()
		.map(|(location, armor)| {
			let front = Decimal::from(armor.front);
			let rear = armor.rear.map_or(Decimal::ZERO, |r| Decimal::from(r) * rear_armor_weight(*location));
			front + rear
		})
		.sum()
}

/// Weighted armor points × armor-type multiplier × 2.5.
fn armor_line(unit: &Unit) -> Decimal {
	weighted_armor_points(unit) * armor_type_multiplier(unit.armor.armor_type) * Decimal::new(25, 1)
}

fn structure_type_multiplier(structure_type: StructureType) -> Decimal {
	use crate::model::StructureType::{Composite, EndoSteel, Industrial, Reinforced, Standard};
	match structure_type {
		Standard => Decimal::ONE,
		EndoSteel | Composite | Industrial => Decimal::new(5, 1),
		Reinforced => Decimal::from(2),
	}
}

/// Engine-type structure multiplier: XL/XXL expose engine criticals in the
/// side torsos, reducing structural survivability value.
fn engine_structure_multiplier(engine_type: EngineType) -> Decimal {
	match engine_type {
		EngineType::Xl | EngineType::Xxl => Decimal::new(5, 1),
		EngineType::Standard | EngineType::Light | EngineType::Compact => Decimal::ONE,
	}
}

fn structure_line(unit: &Unit) -> Decimal {
	let points = Decimal::from(unit.structure_points.total());
	points
		* structure_type_multiplier(unit.structure)
		* Decimal::new(15, 1)
		* engine_structure_multiplier(unit.engine.engine_type)
}

/// Engine-type multiplier (§4.4's table).
fn engine_type_multiplier(engine_type: EngineType) -> Decimal {
	match engine_type {
		EngineType::Standard | EngineType::Compact => Decimal::ONE,
		EngineType::Light => Decimal::new(75, 2),
		EngineType::Xl => Decimal::new(5, 1),
		EngineType::Xxl => Decimal::new(25, 2),
	}
}

fn engine_line(unit: &Unit) -> Decimal {
	Decimal::from(unit.engine.rating) * engine_type_multiplier(unit.engine.engine_type)
}

/// Gyro weight: `ceil(rating / 100)` standard tons, adjusted by a
/// per-type weight factor, then a separate per-type durability multiplier
/// (an XL gyro is lighter but more fragile, so it carries a lower
/// defensive-value multiplier despite the smaller tonnage input).
fn gyro_tonnage(rating: u32, gyro_type: GyroType) -> Decimal {
	let standard_tons = Decimal::from(rating.div_ceil(100));
	let weight_factor = match gyro_type {
		GyroType::Standard | GyroType::HeavyDuty => Decimal::ONE,
		GyroType::Compact | GyroType::Xl => Decimal::new(5, 1),
	};
	crate::fixed::round4(standard_tons * weight_factor)
}

fn gyro_durability_multiplier(gyro_type: GyroType) -> Decimal {
	match gyro_type {
		GyroType::Standard => Decimal::ONE,
		GyroType::HeavyDuty => Decimal::new(12, 1),
		GyroType::Compact => Decimal::new(8, 1),
		GyroType::Xl => Decimal::new(5, 1),
	}
}

fn gyro_line(unit: &Unit) -> Decimal {
	gyro_tonnage(unit.engine.rating, unit.gyro) * gyro_durability_multiplier(unit.gyro)
}

/// Σ catalogue BV of AMS/ECM/Guardian/Stealth-system/CASE/armored-component
/// entries — tech-base-specific BV already lives on the catalogue record.
fn defensive_equipment_line(normalized: &NormalizedUnit) -> Decimal {
	normalized
		.defensive_equipment()
		.filter_map(|item| item.record.as_ref())
		.filter(|record| record.category == EquipmentCategory::Defensive)
		.map(|record| record.base_bv)
		.sum()
}

/// Target Movement Modifier band for a given effective running MP
/// (standard BattleTech "hexes moved" TMM table).
fn tmm_band(run_mp: u32) -> u32 {
	match run_mp {
		0..=2 => 0,
		3..=4 => 1,
		5..=6 => 2,
		7..=9 => 3,
		10..=17 => 4,
		18..=24 => 5,
		_ => 6,
	}
}

/// `1.0 + 0.1 × TMM`, plus `0.1` per point of jump MP that exceeds running
/// MP (spec §4.4's literal text).
fn defensive_factor(movement: &MovementProfile) -> Decimal {
	let tmm = tmm_band(movement.run_mp);
	let mut factor = Decimal::ONE + Decimal::from(tmm) * Decimal::new(1, 1);
	if movement.jump_mp > movement.run_mp {
		let excess = movement.jump_mp - movement.run_mp;
		factor += Decimal::from(excess) * Decimal::new(1, 1);
	}
	factor
}
