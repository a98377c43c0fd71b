//! Catalogue-side equipment description.
//!
//! Spec §9's "Polymorphism over equipment kinds" note: equipment is modeled
//! as a flat, tagged record over a fixed capability set, dispatched on by
//! each stage. No per-category struct hierarchy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::unit::TechBase;

/// Broad capability classification, used for dispatch at every pipeline
/// stage (ordering, ammo capping, explosive penalty, physical-attack BV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EquipmentCategory {
	EnergyWeapon,
	BallisticWeapon,
	MissileWeapon,
	Ammunition,
	Electronic,
	PhysicalWeapon,
	Defensive,
	Fixed,
}

impl EquipmentCategory {
	#[must_use]
	pub fn is_weapon(self) -> bool {
		matches!(
			self,
			Self::EnergyWeapon | Self::BallisticWeapon | Self::MissileWeapon
		)
	}
}

/// Firing-range bands, all in hexes (`None` when the weapon has no band at
/// that distance, e.g. most energy weapons have no minimum range).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ranges {
	pub minimum: Option<u32>,
	pub short: u32,
	pub medium: u32,
	pub long: u32,
	pub extreme: Option<u32>,
}

/// Cluster-fire weapons (LRM/SRM/MML/MRM/etc.) report how many sub-
/// projectiles they divide their damage into; this feeds ammo accounting
/// for cluster ammo bins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClusterInfo {
	pub cluster_size: u32,
}

/// A resolved catalogue entry. One record serves every pipeline stage
/// that needs to know what a piece of equipment *is* — stages dispatch on
/// `category` and the relevant optional fields rather than downcasting a
/// trait object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRecord {
	/// Canonical id, as returned by [`crate::catalogue::EquipmentCatalogue::lookup`].
	pub id: String,
	pub category: EquipmentCategory,
	/// Catalogue (unmodified) BV, before any ordering-stage multiplier.
	pub base_bv: Decimal,
	pub base_damage: Decimal,
	/// Heat generated per shot (weapons only).
	pub heat_per_shot: Decimal,
	pub ranges: Ranges,
	pub tonnage: Decimal,
	pub crit_slots: u32,
	pub tech_base: TechBase,
	/// Whether an unprotected hit here risks an explosive critical
	/// (ammunition, gauss rifles, etc.) — feeds the §4.7 penalty.
	pub explosive: bool,
	pub cluster: Option<ClusterInfo>,
	/// Whether this item accepts Artemis/TC pairing (§4.6).
	pub enhanceable: bool,
	/// For ammunition: the weapon-type id it feeds (joined against
	/// [`crate::catalogue::EquipmentCatalogue::ammo_matches`]).
	pub ammo_key: Option<String>,
	/// For ammunition: rounds per standard (full) bin, used to scale a
	/// partially-depleted bin's BV contribution (§4.7 step 3).
	pub standard_round_count: Option<u32>,
	/// Whether this is a one-shot launcher (half BV penalty, §4.7).
	#[serde(default)]
	pub one_shot: bool,
}

impl EquipmentRecord {
	/// True for direct-fire ballistic/energy weapons with damage ≥ 5,
	/// eligible for a Targeting Computer bonus (§4.6).
	#[must_use]
	pub fn tc_compatible(&self) -> bool {
		matches!(
			self.category,
			EquipmentCategory::BallisticWeapon | EquipmentCategory::EnergyWeapon
		) && self.base_damage >= Decimal::from(5)
	}
}
