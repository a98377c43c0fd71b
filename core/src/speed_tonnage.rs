//! Speed and tonnage factors (spec §4.8 / C8).

use rust_decimal::Decimal;

use crate::model::Configuration;
use crate::movement::{MovementProfile, jump_weight};

/// Both published factors, plus the offensive subtotal they're folded into.
#[derive(Debug, Clone, Copy)]
pub struct SpeedTonnageFactors {
	pub speed_factor: Decimal,
	/// Computed per §4.8 and carried in diagnostics; per the engine's
	/// literal combination rule only `speed_factor` multiplies the
	/// offensive subtotal (see [`Self::calculate`]).
	pub tonnage_factor: Decimal,
	pub offensive_subtotal: Decimal,
}

pub struct SpeedAndTonnageFactors;

impl SpeedAndTonnageFactors {
	/// `offensiveSubtotal = offensiveSubtotalPreFactor × speedFactor`
	/// (§4.8's literal combination rule — tonnage factor is reported for
	/// diagnostics but does not re-scale the offensive subtotal).
	#[must_use]
	pub fn calculate(
		unit: &crate::model::Unit,
		movement: &MovementProfile,
		offensive_subtotal_pre_factor: Decimal,
	) -> SpeedTonnageFactors {
		let speed_factor = speed_factor(movement);
		let tonnage_factor = tonnage_factor(unit);
		let offensive_subtotal = crate::fixed::round4(offensive_subtotal_pre_factor * speed_factor);

		SpeedTonnageFactors { speed_factor, tonnage_factor, offensive_subtotal }
	}
}

/// `MF = effectiveRunMP + max(0, jumpMP×jumpWeight − round(effectiveRunMP/2))`,
/// `speedFactor = ((MF − 5) × 0.1) + 1.0`, clamped to `[0.5, 2.5]`.
fn speed_factor(movement: &MovementProfile) -> Decimal {
	let effective_run = movement.effective_run_mp();
	let weighted_jump = Decimal::from(movement.jump_mp) * jump_weight(movement.jump_type);
	let half_run = crate::fixed::round_to_integer(effective_run / Decimal::from(2));
	let excess = (weighted_jump - half_run).max(Decimal::ZERO);
	let mf = effective_run + excess;

	let raw = (mf - Decimal::from(5)) * Decimal::new(1, 1) + Decimal::ONE;
	raw.clamp(Decimal::new(5, 1), Decimal::new(25, 1))
}

/// `1 + tonnage/100`, adjusted by configuration (§4.8: LAM ×0.95 for
/// conversion cost; Tripod and Quad unchanged).
fn tonnage_factor(unit: &crate::model::Unit) -> Decimal {
	let base = Decimal::ONE + Decimal::from(unit.tonnage) / Decimal::from(100);
	let config_multiplier = match unit.configuration {
		Configuration::Lam => Decimal::new(95, 2),
		Configuration::Biped | Configuration::Quad | Configuration::Tripod | Configuration::QuadVee => {
			Decimal::ONE
		}
	};
	crate::fixed::round4(base * config_multiplier)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::JumpType;

	#[test]
	fn speed_factor_clamps_to_published_bounds() {
		let slow = MovementProfile { walk_mp: 0, run_mp: 0, jump_mp: 0, jump_type: JumpType::Standard };
		assert_eq!(speed_factor(&slow), Decimal::new(5, 1));

		let fast =
			MovementProfile { walk_mp: 20, run_mp: 30, jump_mp: 0, jump_type: JumpType::Standard };
		assert_eq!(speed_factor(&fast), Decimal::new(25, 1));
	}

	#[test]
	fn lam_tonnage_factor_applies_conversion_penalty() {
		let mut unit = test_unit();
		unit.configuration = Configuration::Lam;
		unit.tonnage = 50;
		assert_eq!(tonnage_factor(&unit), Decimal::new(1425, 3));
	}

	fn test_unit() -> crate::model::Unit {
		use crate::model::{
			Armor, ArmorType, CockpitType, Engine, EngineType, GyroType, HeatSinkType, HeatSinks,
			Movement, StructurePoints, StructureType, TechBase, Unit,
		};
		Unit {
			chassis: "T".into(),
			variant: "T-1".into(),
			tonnage: 50,
			tech_base: TechBase::InnerSphere,
			configuration: Configuration::Biped,
			engine: Engine { engine_type: EngineType::Standard, rating: 200 },
			gyro: GyroType::Standard,
			cockpit: CockpitType::Standard,
			structure: StructureType::Standard,
			structure_points: StructurePoints { by_location: vec![] },
			armor: Armor { armor_type: ArmorType::Standard, by_location: vec![] },
			heat_sinks: HeatSinks { sink_type: HeatSinkType::Single, count: 10, integral_count: 10 },
			movement: Movement {
				walk_mp: 4,
				jump_mp: 0,
				jump_type: JumpType::Standard,
				masc: false,
				supercharger: false,
				tsm: false,
			},
			equipment: vec![],
			special_pilot_abilities: vec![],
		}
	}
}
