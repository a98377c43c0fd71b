//! The caller-supplied, read-only unit description.
//!
//! These structs are the external field contract from spec §6: the engine
//! only commits to the shape below, not to any particular on-disk
//! serialization — callers own their own file formats and map into this.

use serde::{Deserialize, Serialize};

/// Tech base of a unit or a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TechBase {
	InnerSphere,
	Clan,
	Mixed,
}

/// Chassis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Configuration {
	Biped,
	Quad,
	Tripod,
	Lam,
	QuadVee,
}

/// Engine type, driving the defensive engine multiplier (§4.4) and the
/// structure-type multiplier interaction noted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EngineType {
	Standard,
	Light,
	Xl,
	Xxl,
	Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum GyroType {
	Standard,
	Compact,
	HeavyDuty,
	Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CockpitType {
	Standard,
	Small,
	Torso,
	Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StructureType {
	Standard,
	EndoSteel,
	Composite,
	Reinforced,
	Industrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ArmorType {
	Standard,
	FerroFibrous,
	HeavyFerroFibrous,
	LightFerroFibrous,
	Stealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum HeatSinkType {
	Single,
	Double,
	DoubleClan,
	Laser,
	Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum JumpType {
	Standard,
	Improved,
	Mechanical,
	Umu,
}

/// Mounting location. Quad/tripod-only variants are simply unused on a
/// biped unit; the normalizer does not validate legality of a location for
/// a given [`Configuration`] (construction-rules validation is out of
/// scope per spec §1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "PascalCase")]
pub enum Location {
	Head,
	CenterTorso,
	LeftTorso,
	RightTorso,
	LeftArm,
	RightArm,
	LeftLeg,
	RightLeg,
	CenterLeg,
	FrontLeftLeg,
	FrontRightLeg,
	RearLeftLeg,
	RearRightLeg,
}

impl Location {
	/// Torso locations are the only ones that carry a rear armor arc.
	#[must_use]
	pub fn has_rear_arc(self) -> bool {
		matches!(self, Self::CenterTorso | Self::LeftTorso | Self::RightTorso)
	}

	/// Whether a functional actuator at this location contributes to
	/// physical-attack BV (arms punch, legs kick — §4.7).
	#[must_use]
	pub fn is_arm(self) -> bool {
		matches!(self, Self::LeftArm | Self::RightArm)
	}

	#[must_use]
	pub fn is_leg(self) -> bool {
		matches!(
			self,
			Self::LeftLeg
				| Self::RightLeg | Self::CenterLeg
				| Self::FrontLeftLeg
				| Self::FrontRightLeg
				| Self::RearLeftLeg
				| Self::RearRightLeg
		)
	}
}

/// Engine description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Engine {
	pub engine_type: EngineType,
	pub rating: u32,
}

/// Per-location armor point allocation. `rear` is populated only for
/// torso locations, per the invariant in spec §3.1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LocationArmor {
	pub front: u32,
	pub rear: Option<u32>,
}

/// Full armor loadout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armor {
	pub armor_type: ArmorType,
	pub by_location: Vec<(Location, LocationArmor)>,
}

/// Per-location internal structure point allocation, as printed on the
/// record sheet. Deriving this from tonnage/configuration is construction-
/// rules territory (out of scope per spec §1); the ingestion layer supplies
/// it alongside armor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructurePoints {
	pub by_location: Vec<(Location, u32)>,
}

impl StructurePoints {
	#[must_use]
	pub fn total(&self) -> u32 {
		self.by_location.iter().map(|(_, points)| *points).sum()
	}
}

/// Heat sink loadout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeatSinks {
	pub sink_type: HeatSinkType,
	pub count: u32,
	/// Count of sinks integrally mounted in the engine (subset of `count`,
	/// capped by the engine at `min(10, floor(rating / 25))` — see §4.5).
	pub integral_count: u32,
}

/// Raw movement profile as described on the record sheet, before MASC/TSM
/// derivation (that derivation is [`crate::movement::MovementProfile`]'s job).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Movement {
	pub walk_mp: u32,
	pub jump_mp: u32,
	pub jump_type: JumpType,
	pub masc: bool,
	pub supercharger: bool,
	/// Whether Triple-Strength Myomer is installed. BV treats TSM as active
	/// whenever present (§4.3) — there is no separate "active" flag.
	pub tsm: bool,
}

/// A single piece of mounted equipment (weapon, ammo bin, electronic,
/// physical weapon, or defensive system).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
	/// Catalogue id, resolved by [`crate::catalogue::EquipmentCatalogue`].
	pub id: String,
	pub location: Location,
	#[serde(default)]
	pub rear_mounted: bool,
	/// For Artemis/TC/PPC-capacitor enhancements and ammo bins: the id of
	/// the item this one is linked to. `None` for unlinked equipment.
	#[serde(default)]
	pub linked_item: Option<String>,
	/// Rounds remaining, for ammunition bins only.
	#[serde(default)]
	pub ammo_remaining: Option<u32>,
	/// Whether this item sits behind CASE in its location (reduces the
	/// explosive-component penalty for this item to zero — §4.7).
	#[serde(default)]
	pub case_protected: bool,
}

/// A fully described unit, as handed to [`crate::calculate`].
///
/// Read-only for the duration of a calculation; components borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
	pub chassis: String,
	pub variant: String,
	/// 5..=200, integer tons.
	pub tonnage: u32,
	pub tech_base: TechBase,
	pub configuration: Configuration,
	pub engine: Engine,
	pub gyro: GyroType,
	pub cockpit: CockpitType,
	pub structure: StructureType,
	pub structure_points: StructurePoints,
	pub armor: Armor,
	pub heat_sinks: HeatSinks,
	pub movement: Movement,
	pub equipment: Vec<EquipmentItem>,
	#[serde(default)]
	pub special_pilot_abilities: Vec<String>,
}

impl Unit {
	/// `"{chassis} {variant}"`, used as the id in reports.
	#[must_use]
	pub fn display_id(&self) -> String {
		format!("{} {}", self.chassis, self.variant)
	}

}
