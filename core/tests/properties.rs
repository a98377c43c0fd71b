//! Engine-wide invariants (spec §8, properties 1-7).

mod common;

use bv_core::model::{FiringArc, Location, LocationArmor};
use bv_core::{CalculateOptions, PilotSkill, calculate};
use common::{base_unit, catalogue, mount};

#[test]
fn determinism_across_repeated_calls() {
	let catalogue = catalogue();
	let mut unit = base_unit("Determinism", "TST-1D", 50);
	unit.equipment.push(mount("medium-laser", Location::RightArm));

	let first = calculate(&unit, &catalogue, CalculateOptions::default()).unwrap();
	let second = calculate(&unit, &catalogue, CalculateOptions::default()).unwrap();

	assert_eq!(first.final_bv, second.final_bv);
	assert_eq!(first.defensive_subtotal, second.defensive_subtotal);
	assert_eq!(first.offensive_subtotal, second.offensive_subtotal);
}

#[test]
fn adding_armor_never_decreases_final_bv() {
	let catalogue = catalogue();
	let mut light = base_unit("Armor", "TST-1A", 50);
	light.equipment.push(mount("medium-laser", Location::RightArm));

	let mut heavier = light.clone();
	for (_, armor) in &mut heavier.armor.by_location {
		armor.front += 5;
	}

	let light_bv = calculate(&light, &catalogue, CalculateOptions::default()).unwrap().final_bv;
	let heavier_bv = calculate(&heavier, &catalogue, CalculateOptions::default()).unwrap().final_bv;

	assert!(heavier_bv >= light_bv);
}

#[test]
fn adding_a_weapon_never_decreases_final_bv() {
	let catalogue = catalogue();
	let bare = base_unit("Weapons", "TST-1W", 50);

	let mut armed = bare.clone();
	armed.equipment.push(mount("medium-laser", Location::RightArm));

	let bare_bv = calculate(&bare, &catalogue, CalculateOptions::default()).unwrap().final_bv;
	let armed_bv = calculate(&armed, &catalogue, CalculateOptions::default()).unwrap().final_bv;

	assert!(armed_bv >= bare_bv);
}

#[test]
fn heat_halving_boundary_is_strict() {
	let catalogue = catalogue();

	// 10 single heat sinks => capacity 10. Two medium lasers (3 heat each)
	// plus a large laser (8 heat) = 14 heat, already over capacity; trim to
	// exactly 10 by using only lasers summing to capacity.
	let mut at_capacity = base_unit("HeatBoundary", "TST-1H", 50);
	at_capacity.heat_sinks.count = 10;
	at_capacity.equipment.push(mount("large-laser", Location::RightArm)); // heat 8
	at_capacity.equipment.push(mount("medium-laser", Location::LeftArm)); // heat 3, cumulative 11 > 10

	let options = CalculateOptions { diagnostics: true, ..CalculateOptions::default() };
	let breakdown = calculate(&at_capacity, &catalogue, options).unwrap();
	let diagnostics = breakdown.diagnostics.unwrap();

	// Ordered descending by modified BV: large laser (123) first, medium
	// laser (46) second. Cumulative heat: 8 (not > 10), then 11 (> 10) ->
	// only the second weapon halves.
	assert!(!diagnostics.weapons[0].halved_for_heat);
	assert!(diagnostics.weapons[1].halved_for_heat);
}

#[test]
fn ammo_bv_is_capped_at_weapon_bv_total() {
	let catalogue = catalogue();
	let mut unit = base_unit("AmmoCap", "TST-1M", 60);
	unit.equipment.push(mount("lrm-20", Location::RightTorso));
	// Eight full ammo bins, each worth 23 BV (184 total), vs. a single
	// LRM-20 (181 BV): ammo contribution caps at 181, not 184.
	for _ in 0..8 {
		unit.equipment.push(mount("lrm-20-ammo", Location::LeftTorso));
	}

	let options = CalculateOptions { diagnostics: true, ..CalculateOptions::default() };
	let breakdown = calculate(&unit, &catalogue, options).unwrap();
	let diagnostics = breakdown.diagnostics.unwrap();

	let lrm_ammo = diagnostics.ammo.iter().find(|a| a.weapon_type == "lrm20").unwrap();
	assert_eq!(lrm_ammo.ammo_bv_raw, rust_decimal::Decimal::from(184));
	assert_eq!(lrm_ammo.ammo_bv_capped, rust_decimal::Decimal::from(181));
}

#[test]
fn regular_pilot_skill_is_neutral() {
	let catalogue = catalogue();
	let mut unit = base_unit("PilotNeutral", "TST-1P", 50);
	unit.equipment.push(mount("ac-10", Location::RightTorso));

	let unskilled = calculate(&unit, &catalogue, CalculateOptions::default()).unwrap();
	let regular = calculate(
		&unit,
		&catalogue,
		CalculateOptions { pilot: Some(PilotSkill { gunnery: 4, piloting: 5 }), ..CalculateOptions::default() },
	)
	.unwrap();

	assert_eq!(unskilled.final_bv, regular.final_bv);
	assert_eq!(unskilled.base_bv, regular.base_bv);
}

#[test]
fn rear_mount_halves_weapon_contribution() {
	let catalogue = catalogue();
	let mut forward = base_unit("RearMount", "TST-1R", 50);
	forward.equipment.push(mount("large-laser", Location::CenterTorso));

	let mut rear = forward.clone();
	rear.equipment[0].rear_mounted = true;

	let options = CalculateOptions { diagnostics: true, ..CalculateOptions::default() };
	let forward_breakdown = calculate(&forward, &catalogue, options).unwrap();
	let rear_breakdown = calculate(&rear, &catalogue, options).unwrap();

	let forward_weapon = &forward_breakdown.diagnostics.unwrap().weapons[0];
	let rear_weapon = &rear_breakdown.diagnostics.unwrap().weapons[0];

	assert_eq!(rear_weapon.arc, FiringArc::Rear);
	assert_eq!(rear_weapon.modified_bv, forward_weapon.modified_bv * rust_decimal::Decimal::new(5, 1));
}

#[test]
fn forward_firing_side_torso_weapon_is_not_arc_penalized() {
	// A plain (non-rear) weapon in a flanking location fires forward and
	// must count at full value — there is no standalone side-arc penalty.
	let catalogue = catalogue();
	let mut center = base_unit("SideArc", "TST-1S", 50);
	center.equipment.push(mount("large-laser", Location::CenterTorso));

	let mut side = base_unit("SideArc", "TST-1S", 50);
	side.equipment.push(mount("large-laser", Location::RightTorso));

	let options = CalculateOptions { diagnostics: true, ..CalculateOptions::default() };
	let center_weapon = &calculate(&center, &catalogue, options).unwrap().diagnostics.unwrap().weapons[0];
	let side_weapon = &calculate(&side, &catalogue, options).unwrap().diagnostics.unwrap().weapons[0];

	assert_eq!(side_weapon.modified_bv, center_weapon.modified_bv);
}

#[test]
fn side_mounted_rear_facing_weapon_stacks_to_a_quarter_value() {
	// §4.6's named combination: a rear-mounted weapon in a flanking location
	// (arm/side-torso) stacks the 0.5 side multiplier with the 0.5 rear
	// multiplier, landing at 0.25 of catalogue BV rather than 0.5.
	let catalogue = catalogue();
	let mut center_rear = base_unit("RearStack", "TST-1X", 50);
	center_rear.equipment.push(mount("large-laser", Location::CenterTorso));
	center_rear.equipment[0].rear_mounted = true;

	let mut side_rear = base_unit("RearStack", "TST-1X", 50);
	side_rear.equipment.push(mount("large-laser", Location::RightTorso));
	side_rear.equipment[0].rear_mounted = true;

	let options = CalculateOptions { diagnostics: true, ..CalculateOptions::default() };
	let center_rear_weapon =
		&calculate(&center_rear, &catalogue, options).unwrap().diagnostics.unwrap().weapons[0];
	let side_rear_weapon = &calculate(&side_rear, &catalogue, options).unwrap().diagnostics.unwrap().weapons[0];

	assert_eq!(center_rear_weapon.modified_bv, rust_decimal::Decimal::new(6150, 2)); // 123 * 0.5
	assert_eq!(side_rear_weapon.modified_bv, rust_decimal::Decimal::new(3075, 2)); // 123 * 0.25
}

#[test]
fn zero_armor_unit_still_produces_a_finite_positive_bv() {
	let catalogue = catalogue();
	let mut unit = base_unit("Bare", "TST-0", 20);
	unit.armor.by_location = vec![(Location::CenterTorso, LocationArmor { front: 0, rear: None })];

	let breakdown = calculate(&unit, &catalogue, CalculateOptions::default()).unwrap();
	assert!(breakdown.final_bv >= 1);
}
