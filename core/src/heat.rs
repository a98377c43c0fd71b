//! Heat capacity and generation (spec §4.5 / C5).

use rust_decimal::Decimal;

use crate::model::HeatSinkType;
use crate::normalize::NormalizedUnit;

/// `(heatCapacity, heatGeneration, heatExcess)` as a single value, consumed
/// by the weapon orderer (§4.6) and offensive calculator (§4.7).
#[derive(Debug, Clone, Copy)]
pub struct HeatProfile {
	pub capacity: Decimal,
	pub generation: Decimal,
	pub excess: Decimal,
}

/// Computes the unit's heat budget (§4.5).
pub struct HeatEfficiencyModel;

impl HeatEfficiencyModel {
	#[must_use]
	pub fn calculate(unit: &crate::model::Unit, normalized: &NormalizedUnit) -> HeatProfile {
		let per_sink = per_sink_dissipation(unit.heat_sinks.sink_type);
		let capacity = Decimal::from(unit.heat_sinks.count) * per_sink;

		let generation: Decimal = normalized.weapons().map(|item| heat_contribution(item)).sum();

		let excess = (generation - capacity).max(Decimal::ZERO);

		HeatProfile {
			capacity: crate::fixed::round4(capacity),
			generation: crate::fixed::round4(generation),
			excess: crate::fixed::round4(excess),
		}
	}
}

/// Heat per shot for a single resolved weapon; zero for an unresolved item
/// (catalogue miss — already warned on by the normalizer).
fn heat_contribution(item: &crate::normalize::ResolvedItem) -> Decimal {
	item.record.as_ref().map_or(Decimal::ZERO, |r| r.heat_per_shot)
}

/// Per-sink heat dissipation (§4.5): Single and Compact dissipate 1;
/// Double, Clan Double, and Laser heat sinks dissipate 2.
fn per_sink_dissipation(sink_type: HeatSinkType) -> Decimal {
	match sink_type {
		HeatSinkType::Single | HeatSinkType::Compact => Decimal::ONE,
		HeatSinkType::Double | HeatSinkType::DoubleClan | HeatSinkType::Laser => Decimal::from(2),
	}
}

/// Engine-integral heat sink cap (§4.5): `min(10, floor(rating / 25))`.
/// Exposed for callers constructing [`crate::model::HeatSinks::integral_count`]
/// upstream; this module does not itself re-derive it from `count`.
#[must_use]
pub fn integral_heat_sink_cap(engine_rating: u32) -> u32 {
	(engine_rating / 25).min(10)
}
