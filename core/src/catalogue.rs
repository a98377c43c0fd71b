//! Equipment id resolution (spec §4.1 / C1).
//!
//! Grounded on the teacher's `parser/data.rs` id-normalization helpers
//! (`normalize_shell_type`, `clean_shell_name`) for the canonicalization
//! approach, and on `cli/src/run.rs`'s `DashMap`-backed `BallisticCache`
//! for the concurrent memoized-lookup shape — every `EquipmentCatalogue`
//! is shared read-only across the validator's rayon worker pool (§5), so a
//! lock-free cache in front of whatever the concrete implementation does
//! (a database lookup, a parsed-table scan, …) avoids repeated work
//! without any synchronization on the hot path.

use std::collections::HashMap;

use dashmap::DashMap;

use crate::model::EquipmentRecord;

/// Resolves equipment ids / display names to [`EquipmentRecord`]s.
///
/// Implementations are shared read-only for the lifetime of the process
/// (spec §3.1's Ownership notes); `lookup` must therefore take `&self`, not
/// `&mut self`.
pub trait EquipmentCatalogue: Send + Sync {
	/// Resolve an id or display name to its catalogue record.
	///
	/// Never errors: an unresolvable id is [`None`], which the normalizer
	/// (§4.2) turns into a warning, not a fatal error.
	fn lookup(&self, id: &str) -> Option<EquipmentRecord>;

	/// Whether an ammunition item feeds a given weapon.
	fn ammo_matches(&self, ammo_id: &str, weapon_id: &str) -> bool {
		let (Some(ammo), Some(weapon)) = (self.lookup(ammo_id), self.lookup(weapon_id)) else {
			return false;
		};
		ammo.ammo_key.as_deref() == Some(weapon.id.as_str())
	}

	/// Whether the item risks an explosive critical if hit unprotected.
	fn is_explosive(&self, id: &str) -> bool {
		self.lookup(id).is_some_and(|r| r.explosive)
	}
}

/// Collapse an id/display-name variant into its canonical lookup key.
///
/// `"LRM-20"`, `"lrm 20"`, and `"LRM20"` all collapse to `"lrm20"`: lowercase,
/// then drop spaces, hyphens, and underscores.
#[must_use]
pub fn normalize_id(raw: &str) -> String {
	raw.chars()
		.filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
		.flat_map(char::to_lowercase)
		.collect()
}

/// A simple in-memory, read-only catalogue, keyed by [`normalize_id`].
///
/// Sufficient to run the engine standalone and to host fixture data in
/// tests; real deployments (e.g. the sibling MUL-scraper/API) can supply
/// their own [`EquipmentCatalogue`] impl without touching the rest of this
/// crate.
pub struct StaticCatalogue {
	records: HashMap<String, EquipmentRecord>,
	cache: DashMap<String, Option<EquipmentRecord>>,
}

impl StaticCatalogue {
	#[must_use]
	pub fn new() -> Self {
		Self {
			records: HashMap::new(),
			cache: DashMap::new(),
		}
	}

	/// Build a catalogue from a list of records, keyed by their normalized id.
	#[must_use]
	pub fn from_records(records: impl IntoIterator<Item = EquipmentRecord>) -> Self {
		let mut catalogue = Self::new();
		for record in records {
			catalogue.insert(record);
		}
		catalogue
	}

	/// Insert or replace a record.
	pub fn insert(&mut self, record: EquipmentRecord) {
		let key = normalize_id(&record.id);
		self.cache.remove(&key);
		self.records.insert(key, record);
	}
}

impl Default for StaticCatalogue {
	fn default() -> Self {
		Self::new()
	}
}

impl EquipmentCatalogue for StaticCatalogue {
	fn lookup(&self, id: &str) -> Option<EquipmentRecord> {
		let key = normalize_id(id);
		if let Some(hit) = self.cache.get(&key) {
			return hit.clone();
		}
		let result = self.records.get(&key).cloned();
		self.cache.insert(key, result.clone());
		result
	}
}

#[cfg(test)]
mod tests {
	use rust_decimal::Decimal;

	use super::*;
	use crate::model::{EquipmentCategory, Ranges, TechBase};

	fn lrm20() -> EquipmentRecord {
		EquipmentRecord {
			id: "lrm20".to_owned(),
			category: EquipmentCategory::MissileWeapon,
			base_bv: Decimal::from(181),
			base_damage: Decimal::from(20),
			heat_per_shot: Decimal::from(6),
			ranges: Ranges {
				minimum: Some(6),
				short: 7,
				medium: 14,
				long: 21,
				extreme: None,
			},
			tonnage: Decimal::from(10),
			crit_slots: 5,
			tech_base: TechBase::InnerSphere,
			explosive: false,
			cluster: Some(crate::model::ClusterInfo { cluster_size: 20 }),
			enhanceable: true,
			ammo_key: None,
			standard_round_count: None,
			one_shot: false,
		}
	}

	#[test]
	fn normalize_collapses_variants() {
		assert_eq!(normalize_id("LRM-20"), "lrm20");
		assert_eq!(normalize_id("lrm 20"), "lrm20");
		assert_eq!(normalize_id("LRM20"), "lrm20");
	}

	#[test]
	fn lookup_is_case_and_separator_insensitive() {
		let catalogue = StaticCatalogue::from_records([lrm20()]);
		assert!(catalogue.lookup("LRM-20").is_some());
		assert!(catalogue.lookup("lrm 20").is_some());
		assert!(catalogue.lookup("lrm20").is_some());
	}

	#[test]
	fn unknown_equipment_is_none_not_error() {
		let catalogue = StaticCatalogue::new();
		assert!(catalogue.lookup("nonexistent-gizmo").is_none());
	}

	#[test]
	fn ammo_matches_by_canonical_weapon_id() {
		let mut catalogue = StaticCatalogue::new();
		catalogue.insert(lrm20());
		let mut ammo = lrm20();
		ammo.id = "lrm20ammo".to_owned();
		ammo.category = EquipmentCategory::Ammunition;
		ammo.ammo_key = Some("lrm20".to_owned());
		ammo.standard_round_count = Some(6);
		catalogue.insert(ammo);

		assert!(catalogue.ammo_matches("LRM-20 Ammo", "LRM-20"));
		assert!(!catalogue.ammo_matches("LRM-20 Ammo", "lrm10"));
	}
}
