//! Shared fixtures for integration tests.

use bv_core::catalogue::StaticCatalogue;
use bv_core::model::{
	Armor, ArmorType, ClusterInfo, CockpitType, Configuration, Engine, EngineType,
	EquipmentCategory, EquipmentItem, EquipmentRecord, GyroType, HeatSinkType, HeatSinks, JumpType,
	Location, LocationArmor, Movement, Ranges, StructurePoints, StructureType, TechBase, Unit,
};
use rust_decimal::Decimal;

/// A catalogue stocked with the handful of weapons the fixture units below
/// mount.
pub fn catalogue() -> StaticCatalogue {
	StaticCatalogue::from_records([
		weapon("medium-laser", EquipmentCategory::EnergyWeapon, 46, 5, 3, None, None),
		weapon("large-laser", EquipmentCategory::EnergyWeapon, 123, 8, 8, None, None),
		weapon("ac-10", EquipmentCategory::BallisticWeapon, 124, 10, 3, Some("ac-10"), None),
		weapon("ac-20", EquipmentCategory::BallisticWeapon, 178, 20, 7, Some("ac-20"), None),
		weapon("lrm-20", EquipmentCategory::MissileWeapon, 181, 20, 6, Some("lrm-20"), Some(20)),
		weapon("srm-6", EquipmentCategory::MissileWeapon, 59, 12, 4, Some("srm-6"), Some(2)),
		// ammo_key must match the weapon's own canonical `id` exactly — that's
		// the join key `offensive::ammo_bv_capped` uses to find `W_T`.
		ammo("ac-10-ammo", "ac-10", 15, 10),
		ammo("ac-20-ammo", "ac-20", 22, 5),
		ammo("lrm-20-ammo", "lrm-20", 23, 6),
		ammo("srm-6-ammo", "srm-6", 7, 15),
	])
}

#[allow(clippy::too_many_arguments)]
fn weapon(
	id: &str,
	category: EquipmentCategory,
	base_bv: i64,
	base_damage: i64,
	heat: i64,
	ammo_key: Option<&str>,
	cluster_size: Option<u32>,
) -> EquipmentRecord {
	EquipmentRecord {
		id: id.to_owned(),
		category,
		base_bv: Decimal::from(base_bv),
		base_damage: Decimal::from(base_damage),
		heat_per_shot: Decimal::from(heat),
		ranges: Ranges::default(),
		tonnage: Decimal::ONE,
		crit_slots: 1,
		tech_base: TechBase::InnerSphere,
		explosive: false,
		cluster: cluster_size.map(|cluster_size| ClusterInfo { cluster_size }),
		enhanceable: true,
		ammo_key: ammo_key.map(str::to_owned),
		standard_round_count: None,
		one_shot: false,
	}
}

fn ammo(id: &str, weapon_id: &str, base_bv: i64, rounds: u32) -> EquipmentRecord {
	EquipmentRecord {
		id: id.to_owned(),
		category: EquipmentCategory::Ammunition,
		base_bv: Decimal::from(base_bv),
		base_damage: Decimal::ZERO,
		heat_per_shot: Decimal::ZERO,
		ranges: Ranges::default(),
		tonnage: Decimal::ONE,
		crit_slots: 1,
		tech_base: TechBase::InnerSphere,
		explosive: true,
		cluster: None,
		enhanceable: false,
		ammo_key: Some(weapon_id.to_owned()),
		standard_round_count: Some(rounds),
		one_shot: false,
	}
}

/// A generic 50-ton biped, standard everything, no loadout — callers add
/// armor/structure/equipment as their test needs.
pub fn base_unit(chassis: &str, variant: &str, tonnage: u32) -> Unit {
	Unit {
		chassis: chassis.to_owned(),
		variant: variant.to_owned(),
		tonnage,
		tech_base: TechBase::InnerSphere,
		configuration: Configuration::Biped,
		engine: Engine { engine_type: EngineType::Standard, rating: tonnage * 4 },
		gyro: GyroType::Standard,
		cockpit: CockpitType::Standard,
		structure: StructureType::Standard,
		structure_points: StructurePoints {
			by_location: vec![
				(Location::Head, 3),
				(Location::CenterTorso, 20),
				(Location::LeftTorso, 14),
				(Location::RightTorso, 14),
				(Location::LeftArm, 10),
				(Location::RightArm, 10),
				(Location::LeftLeg, 14),
				(Location::RightLeg, 14),
			],
		},
		armor: Armor {
			armor_type: ArmorType::Standard,
			by_location: vec![
				(Location::Head, LocationArmor { front: 9, rear: None }),
				(Location::CenterTorso, LocationArmor { front: 31, rear: Some(10) }),
				(Location::LeftTorso, LocationArmor { front: 21, rear: Some(7) }),
				(Location::RightTorso, LocationArmor { front: 21, rear: Some(7) }),
				(Location::LeftArm, LocationArmor { front: 17, rear: None }),
				(Location::RightArm, LocationArmor { front: 17, rear: None }),
				(Location::LeftLeg, LocationArmor { front: 21, rear: None }),
				(Location::RightLeg, LocationArmor { front: 21, rear: None }),
			],
		},
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

pub fn mount(id: &str, location: Location) -> EquipmentItem {
	EquipmentItem {
		id: id.to_owned(),
		location,
		rear_mounted: false,
		linked_item: None,
		ammo_remaining: None,
		case_protected: false,
	}
}
