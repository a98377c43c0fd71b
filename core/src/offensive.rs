//! Offensive BV subtotal (spec §4.7 / C7).

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::heat::HeatProfile;
use crate::model::{AmmoDiagnostic, Configuration, EquipmentCategory, WeaponDiagnostic};
use crate::movement::MovementProfile;
use crate::normalize::NormalizedUnit;
use crate::weapon_order::OrderedWeapon;

/// Offensive-subtotal line items, mirroring the diagnostics payload.
#[derive(Debug, Clone)]
pub struct OffensiveBreakdown {
	pub weapon_bv: Decimal,
	pub ammo_bv: Decimal,
	pub physical_bv: Decimal,
	pub electronics_bv: Decimal,
	pub explosive_penalty: Decimal,
	/// `weaponBV + ammoBV + physicalBV + electronicsBV − explosivePenalty`
	/// (§4.7 step 7, pre speed/tonnage factor).
	pub subtotal: Decimal,
	pub weapon_diagnostics: Vec<WeaponDiagnostic>,
	pub ammo_diagnostics: Vec<AmmoDiagnostic>,
}

pub struct OffensiveBVCalculator;

impl OffensiveBVCalculator {
	#[must_use]
	pub fn calculate(
		unit: &crate::model::Unit,
		normalized: &NormalizedUnit,
		ordered: &[OrderedWeapon<'_>],
		heat: &HeatProfile,
		movement: &MovementProfile,
	) -> OffensiveBreakdown {
		let (weapon_bv, weapon_diagnostics) = heat_halving_walk(ordered, heat.capacity);
		let (ammo_bv, ammo_diagnostics) = ammo_bv_capped(ordered, normalized);
		let physical_bv = physical_attack_bv(unit, normalized, movement);
		let electronics_bv = electronics_bv(normalized);
		let explosive_penalty = explosive_penalty(normalized);

		let subtotal =
			crate::fixed::round4(weapon_bv + ammo_bv + physical_bv + electronics_bv - explosive_penalty);

		OffensiveBreakdown {
			weapon_bv,
			ammo_bv,
			physical_bv,
			electronics_bv,
			explosive_penalty,
			subtotal,
			weapon_diagnostics,
			ammo_diagnostics,
		}
	}
}

/// §4.7 step 1: walk the ordered list top-down, accumulating heat. Once
/// cumulative heat exceeds capacity, that weapon and every later one
/// contributes half its modified BV, rounded down to the nearest 0.01. The
/// comparison is on cumulative heat *after* adding the current weapon, so a
/// weapon whose heat exactly closes the gap is not halved (spec §9).
fn heat_halving_walk(
	ordered: &[OrderedWeapon<'_>],
	capacity: Decimal,
) -> (Decimal, Vec<WeaponDiagnostic>) {
	let mut cumulative = Decimal::ZERO;
	let mut exceeded = false;
	let mut total = Decimal::ZERO;
	let mut diagnostics = Vec::with_capacity(ordered.len());

	for weapon in ordered {
		let heat = weapon.item.record.as_ref().map_or(Decimal::ZERO, |r| r.heat_per_shot);
		cumulative += heat;
		if cumulative > capacity {
			exceeded = true;
		}

		let contributed = if exceeded {
			crate::fixed::floor_to_2dp(weapon.modified_bv * Decimal::new(5, 1))
		} else {
			weapon.modified_bv
		};
		total += contributed;

		diagnostics.push(WeaponDiagnostic {
			equipment_id: weapon.item.id.clone(),
			location: weapon.item.location,
			arc: weapon.item.arc,
			modified_bv: weapon.modified_bv,
			contributed_bv: contributed,
			halved_for_heat: exceeded,
		});
	}

	(crate::fixed::round4(total), diagnostics)
}

/// §4.7 step 3: ammo BV per weapon type, capped at that type's un-halved,
/// un-modified weapon BV total (`W_T`).
fn ammo_bv_capped(
	ordered: &[OrderedWeapon<'_>],
	normalized: &NormalizedUnit,
) -> (Decimal, Vec<AmmoDiagnostic>) {
	let mut weapon_type_totals: HashMap<String, Decimal> = HashMap::new();
	for weapon in ordered {
		if let Some(record) = &weapon.item.record {
			*weapon_type_totals.entry(record.id.clone()).or_insert(Decimal::ZERO) += weapon.base_bv;
		}
	}

	let mut ammo_raw_by_type: HashMap<String, Decimal> = HashMap::new();
	for item in &normalized.items {
		let Some(record) = &item.record else { continue };
		if record.category != EquipmentCategory::Ammunition {
			continue;
		}
		let Some(weapon_type) = &record.ammo_key else { continue };
		let Some(standard_count) = record.standard_round_count.filter(|c| *c > 0) else { continue };

		let rounds = Decimal::from(item.ammo_remaining.unwrap_or(standard_count));
		let fraction = rounds / Decimal::from(standard_count);
		let ammo_bv = fraction * record.base_bv;

		*ammo_raw_by_type.entry(weapon_type.clone()).or_insert(Decimal::ZERO) += ammo_bv;
	}

	let mut total = Decimal::ZERO;
	let mut diagnostics = Vec::with_capacity(ammo_raw_by_type.len());
	for (weapon_type, raw) in ammo_raw_by_type {
		let cap = weapon_type_totals.get(&weapon_type).copied().unwrap_or(Decimal::ZERO);
		let capped = raw.min(cap);
		total += capped;
		diagnostics.push(AmmoDiagnostic {
			weapon_type,
			weapon_bv_total: cap,
			ammo_bv_raw: crate::fixed::round4(raw),
			ammo_bv_capped: crate::fixed::round4(capped),
		});
	}

	(crate::fixed::round4(total), diagnostics)
}

/// §4.7 step 4: catalogue physical-weapon BV, plus the implicit punch/kick/
/// charge contribution every Biped/Tripod/Quad/QuadVee unit carries from
/// its arm and leg actuators, regardless of whether it mounts a dedicated
/// melee weapon.
fn physical_attack_bv(
	unit: &crate::model::Unit,
	normalized: &NormalizedUnit,
	movement: &MovementProfile,
) -> Decimal {
	let catalogue_bv: Decimal = normalized
		.physical_weapons()
		.filter_map(|item| item.record.as_ref())
		.map(|record| record.base_bv)
		.sum();

	let (arms, legs) = actuator_counts(unit.configuration);
	let tonnage = Decimal::from(unit.tonnage);
	let punch = tonnage * Decimal::new(1, 1) * Decimal::from(arms);
	let kick = tonnage * Decimal::new(2, 1) * Decimal::from(legs);

	let mp = Decimal::from(movement.walk_mp + movement.jump_mp);
	let charge_raw = tonnage * mp * Decimal::new(1, 1);
	let charge = charge_raw.min(punch + kick);

	crate::fixed::round4(catalogue_bv + punch + kick + charge)
}

/// Arm/leg actuator counts by chassis configuration (§4.7: "Biped only;
/// quads compute kick-only with both-leg equivalence").
fn actuator_counts(configuration: Configuration) -> (u32, u32) {
	match configuration {
		Configuration::Biped | Configuration::Lam => (2, 2),
		Configuration::Tripod => (2, 3),
		Configuration::Quad | Configuration::QuadVee => (0, 4),
	}
}

/// §4.7 step 5: fixed catalogue BV for TAG/C3/C3i/NARC/Improved NARC.
/// Weapon-enhancement items (TC, Artemis, PPC capacitor, Apollo) also carry
/// [`crate::model::EquipmentCategory::Electronic`] but contribute zero
/// catalogue BV of their own — their value is realized entirely through the
/// weapon-ordering multiplier (§4.6).
fn electronics_bv(normalized: &NormalizedUnit) -> Decimal {
	normalized
		.electronics()
		.filter_map(|item| item.record.as_ref())
		.map(|record| record.base_bv)
		.sum()
}

/// §4.7 step 6: 1 BV per ton of every explosive component not sitting
/// behind CASE.
fn explosive_penalty(normalized: &NormalizedUnit) -> Decimal {
	normalized
		.items
		.iter()
		.filter(|item| !item.case_protected)
		.filter_map(|item| item.record.as_ref().filter(|r| r.explosive).map(|r| r.tonnage))
		.sum()
}
