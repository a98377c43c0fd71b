//! Unit canonicalization (spec §4.2 / C2).
//!
//! Grounded on the teacher's `parser/vehicle.rs` / `parser/weapon.rs`
//! extract-and-classify pattern: small pure functions walk the input and
//! populate a normalized struct, with a dedicated `classify_*` helper per
//! concern (there: weapon paths vs. rocket paths; here: equipment category
//! and firing arc).

use std::collections::HashMap;

use crate::catalogue::EquipmentCatalogue;
use crate::error::{BvError, Result};
use crate::model::{EquipmentCategory, EquipmentItem, FiringArc, HeatSinkType, TechBase, Unit, Warning};

/// One equipment item after catalogue resolution.
#[derive(Debug, Clone)]
pub struct ResolvedItem {
	/// Index into the original `Unit::equipment`, used as the WeaponOrderer
	/// tie-break (§4.6: "stable by equipment id then original slot index").
	pub slot_index: usize,
	pub id: String,
	pub location: crate::model::Location,
	pub rear_mounted: bool,
	pub linked_item: Option<String>,
	pub ammo_remaining: Option<u32>,
	pub case_protected: bool,
	pub arc: FiringArc,
	/// `None` when the catalogue could not resolve `id` — a warning is
	/// recorded and every later stage treats this item as zero-BV.
	pub record: Option<crate::model::EquipmentRecord>,
}

impl ResolvedItem {
	#[must_use]
	pub fn category(&self) -> Option<EquipmentCategory> {
		self.record.as_ref().map(|r| r.category)
	}
}

/// The canonicalized unit, ready for the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct NormalizedUnit {
	pub items: Vec<ResolvedItem>,
	pub warnings: Vec<Warning>,
}

impl NormalizedUnit {
	/// Weapons (energy/ballistic/missile), in original slot order.
	pub fn weapons(&self) -> impl Iterator<Item = &ResolvedItem> {
		self.items
			.iter()
			.filter(|item| item.category().is_some_and(EquipmentCategory::is_weapon))
	}

	/// Ammunition bins whose `ammo_key` matches `weapon_canonical_id`.
	pub fn ammo_for_weapon(&self, weapon_canonical_id: &str) -> impl Iterator<Item = &ResolvedItem> {
		self.items.iter().filter(move |item| {
			item.record.as_ref().is_some_and(|r| {
				r.category == EquipmentCategory::Ammunition
					&& r.ammo_key.as_deref() == Some(weapon_canonical_id)
			})
		})
	}

	pub fn physical_weapons(&self) -> impl Iterator<Item = &ResolvedItem> {
		self.items
			.iter()
			.filter(|item| item.category() == Some(EquipmentCategory::PhysicalWeapon))
	}

	pub fn electronics(&self) -> impl Iterator<Item = &ResolvedItem> {
		self.items
			.iter()
			.filter(|item| item.category() == Some(EquipmentCategory::Electronic))
	}

	pub fn defensive_equipment(&self) -> impl Iterator<Item = &ResolvedItem> {
		self.items
			.iter()
			.filter(|item| item.category() == Some(EquipmentCategory::Defensive))
	}
}

/// Normalizes a raw [`Unit`] against a catalogue.
pub struct UnitNormalizer<'c> {
	catalogue: &'c dyn EquipmentCatalogue,
}

impl<'c> UnitNormalizer<'c> {
	#[must_use]
	pub fn new(catalogue: &'c dyn EquipmentCatalogue) -> Self {
		Self { catalogue }
	}

	/// Normalize `unit`.
	///
	/// # Errors
	///
	/// Returns [`BvError::UnsupportedConfiguration`] when the unit's
	/// tech-base and equipment combination is structurally impossible
	/// (§4.2) — e.g. Clan-spec double heat sinks on an Inner Sphere unit.
	/// Unresolvable equipment ids never fail this step; they are recorded
	/// as warnings instead (§4.1).
	pub fn normalize(&self, unit: &Unit) -> Result<NormalizedUnit> {
		check_tech_base_compatibility(unit)?;

		let mut warnings = Vec::new();
		let mut items = Vec::with_capacity(unit.equipment.len());

		for (slot_index, raw) in unit.equipment.iter().enumerate() {
			let record = self.catalogue.lookup(&raw.id);
			if record.is_none() {
				warnings.push(Warning {
					equipment_id: raw.id.clone(),
					location: Some(raw.location),
					message: "unknown equipment id; contributing zero BV".to_owned(),
				});
			}

			items.push(ResolvedItem {
				slot_index,
				id: raw.id.clone(),
				location: raw.location,
				rear_mounted: raw.rear_mounted,
				linked_item: raw.linked_item.clone(),
				ammo_remaining: raw.ammo_remaining,
				case_protected: raw.case_protected,
				arc: classify_arc(raw),
				record,
			});
		}

		warn_on_orphan_ammo(&items, &mut warnings);

		Ok(NormalizedUnit { items, warnings })
	}
}

/// Derive firing arc from location + rear-mount flag (§4.2).
fn classify_arc(item: &EquipmentItem) -> FiringArc {
	use crate::model::Location::{CenterTorso, LeftArm, LeftLeg, LeftTorso, RightArm, RightLeg, RightTorso};

	if item.rear_mounted {
		return FiringArc::Rear;
	}
	match item.location {
		CenterTorso => FiringArc::Forward,
		LeftTorso | LeftArm | LeftLeg => FiringArc::Left,
		RightTorso | RightArm | RightLeg => FiringArc::Right,
		_ => FiringArc::Torso,
	}
}

/// Reject tech-base/equipment combinations that cannot physically exist.
///
/// This is deliberately narrow — full construction-rules validation is out
/// of scope (spec §1) — and only catches the unambiguous case named as an
/// example there: mismatched Clan/Inner-Sphere heat sink technology.
fn check_tech_base_compatibility(unit: &Unit) -> Result<()> {
	match (unit.tech_base, unit.heat_sinks.sink_type) {
		(TechBase::InnerSphere, HeatSinkType::DoubleClan) => Err(BvError::unsupported(
			unit.display_id(),
			"Clan-spec double heat sinks cannot be mounted on an Inner Sphere unit",
		)),
		(TechBase::Clan, HeatSinkType::Single) => Err(BvError::unsupported(
			unit.display_id(),
			"Clan tech base has no single heat sink equivalent",
		)),
		_ => Ok(()),
	}
}

/// Record a warning (not an error — §3.1's invariant is enforced by
/// contributing zero BV, handled in the offensive stage) for ammo bins
/// with no matching weapon on the unit.
fn warn_on_orphan_ammo(items: &[ResolvedItem], warnings: &mut Vec<Warning>) {
	let weapon_ids: HashMap<&str, ()> = items
		.iter()
		.filter(|i| i.category().is_some_and(EquipmentCategory::is_weapon))
		.filter_map(|i| i.record.as_ref().map(|r| (r.id.as_str(), ())))
		.collect();

	for item in items {
		if item.category() != Some(EquipmentCategory::Ammunition) {
			continue;
		}
		let Some(record) = &item.record else { continue };
		let feeds_existing_weapon = record
			.ammo_key
			.as_deref()
			.is_some_and(|key| weapon_ids.contains_key(key));
		if !feeds_existing_weapon {
			warnings.push(Warning {
				equipment_id: item.id.clone(),
				location: Some(item.location),
				message: "ammo bin has no compatible weapon on this unit; contributing zero BV"
					.to_owned(),
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalogue::StaticCatalogue;
	use crate::model::{
		Armor, ArmorType, CockpitType, Configuration, Engine, EngineType, GyroType, HeatSinks,
		JumpType, Location, Movement, StructurePoints, StructureType,
	};

	fn base_unit() -> Unit {
		Unit {
			chassis: "Test".to_owned(),
			variant: "TST-1A".to_owned(),
			tonnage: 50,
			tech_base: TechBase::InnerSphere,
			configuration: Configuration::Biped,
			engine: Engine {
				engine_type: EngineType::Standard,
				rating: 200,
			},
			gyro: GyroType::Standard,
			cockpit: CockpitType::Standard,
			structure: StructureType::Standard,
			structure_points: StructurePoints { by_location: vec![] },
			armor: Armor {
				armor_type: ArmorType::Standard,
				by_location: vec![],
			},
			heat_sinks: HeatSinks {
				sink_type: HeatSinkType::Single,
				count: 10,
				integral_count: 10,
			},
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

	#[test]
	fn rejects_clan_double_heat_sink_on_is_unit() {
		let mut unit = base_unit();
		unit.heat_sinks.sink_type = HeatSinkType::DoubleClan;
		let catalogue = StaticCatalogue::new();
		let err = UnitNormalizer::new(&catalogue).normalize(&unit).unwrap_err();
		assert!(matches!(err, BvError::UnsupportedConfiguration { .. }));
	}

	#[test]
	fn unknown_equipment_warns_instead_of_failing() {
		let mut unit = base_unit();
		unit.equipment.push(EquipmentItem {
			id: "totally-made-up-gun".to_owned(),
			location: Location::RightArm,
			rear_mounted: false,
			linked_item: None,
			ammo_remaining: None,
			case_protected: false,
		});
		let catalogue = StaticCatalogue::new();
		let normalized = UnitNormalizer::new(&catalogue).normalize(&unit).unwrap();
		assert_eq!(normalized.warnings.len(), 1);
		assert!(normalized.items[0].record.is_none());
	}

	#[test]
	fn rear_mount_sets_rear_arc() {
		let mut unit = base_unit();
		unit.equipment.push(EquipmentItem {
			id: "medium-laser".to_owned(),
			location: Location::RightTorso,
			rear_mounted: true,
			linked_item: None,
			ammo_remaining: None,
			case_protected: false,
		});
		let catalogue = StaticCatalogue::new();
		let normalized = UnitNormalizer::new(&catalogue).normalize(&unit).unwrap();
		assert_eq!(normalized.items[0].arc, FiringArc::Rear);
	}
}
