//! Weapon ordering and modified-BV multipliers (spec §4.6 / C6).

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::catalogue::normalize_id;
use crate::model::Location;
use crate::normalize::{NormalizedUnit, ResolvedItem};

/// A weapon after every ordering-stage multiplier has been applied, ready
/// for the heat-excess walk in [`crate::offensive`].
#[derive(Debug, Clone)]
pub struct OrderedWeapon<'u> {
	pub item: &'u ResolvedItem,
	/// Catalogue BV before any ordering-stage multiplier — the `W_T` input
	/// to ammo capping (§4.7 step 3).
	pub base_bv: Decimal,
	/// Catalogue BV after every multiplier below, before heat-excess halving.
	pub modified_bv: Decimal,
}

/// Known enhancement attachments, identified by canonical id substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enhancement {
	TargetingComputer,
	ArtemisIv,
	ArtemisV,
	PpcCapacitor,
	ApolloFcs,
}

fn classify_enhancement(canonical_id: &str) -> Option<Enhancement> {
	if canonical_id.contains("ppccapacitor") {
		Some(Enhancement::PpcCapacitor)
	} else if canonical_id.contains("artemisv") {
		Some(Enhancement::ArtemisV)
	} else if canonical_id.contains("artemisiv") || canonical_id.contains("artemis") {
		Some(Enhancement::ArtemisIv)
	} else if canonical_id.contains("apollo") {
		Some(Enhancement::ApolloFcs)
	} else if canonical_id.contains("targetingcomputer") {
		Some(Enhancement::TargetingComputer)
	} else {
		None
	}
}

fn enhancement_multiplier(kind: Enhancement) -> Decimal {
	match kind {
		Enhancement::TargetingComputer => Decimal::new(125, 2),
		Enhancement::ArtemisIv => Decimal::new(12, 1),
		Enhancement::ArtemisV => Decimal::new(13, 1),
		Enhancement::PpcCapacitor => Decimal::new(15, 1),
		Enhancement::ApolloFcs => Decimal::new(115, 2),
	}
}

/// Whether `enhancement` is legally compatible with `weapon` (§4.6: TC
/// applies to direct-fire ballistic/energy ≥5 damage; Artemis to
/// cluster-capable missile launchers; PPC capacitor to PPCs; Apollo to
/// MRMs).
fn enhancement_applies(kind: Enhancement, weapon: &ResolvedItem) -> bool {
	let Some(record) = &weapon.record else { return false };
	if !record.enhanceable {
		return false;
	}
	match kind {
		Enhancement::TargetingComputer => record.tc_compatible(),
		Enhancement::ArtemisIv | Enhancement::ArtemisV => {
			record.category == crate::model::EquipmentCategory::MissileWeapon && record.cluster.is_some()
		}
		Enhancement::PpcCapacitor => normalize_id(&record.id).contains("ppc"),
		Enhancement::ApolloFcs => normalize_id(&record.id).contains("mrm"),
	}
}

/// Whether `location` sits on a flanking (left/right arm or side torso/leg)
/// hull side, as opposed to the centerline (center torso/head).
fn is_flanking_location(location: Location) -> bool {
	matches!(
		location,
		Location::LeftArm
			| Location::LeftTorso
			| Location::LeftLeg
			| Location::RightArm
			| Location::RightTorso
			| Location::RightLeg
	)
}

/// Arc/rear-mount multiplier (§4.6). BV 2.0 has no plain side-arc penalty:
/// a forward-firing weapon counts at full value regardless of which side of
/// the hull it's mounted on. A rear-mounted weapon halves; a rear-mounted
/// weapon in a flanking location halves again on top of that, per published
/// errata on side-mounted rear-facing weapons (0.5 x 0.5 = 0.25) — location
/// and rear-mount stack multiplicatively rather than collapsing to one flag.
fn arc_multiplier(location: Location, rear_mounted: bool) -> Decimal {
	if !rear_mounted {
		return Decimal::ONE;
	}
	if is_flanking_location(location) {
		Decimal::new(25, 2)
	} else {
		Decimal::new(5, 1)
	}
}

/// Orders a unit's weapons by descending modified BV (§4.6).
pub struct WeaponOrderer;

impl WeaponOrderer {
	#[must_use]
	pub fn order(normalized: &NormalizedUnit) -> Vec<OrderedWeapon<'_>> {
		let enhancements = collect_enhancement_links(normalized);

		let mut ordered: Vec<OrderedWeapon<'_>> = normalized
			.weapons()
			.enumerate()
			.filter_map(|(slot, item)| {
				let record = item.record.as_ref()?;
				let base_bv = record.base_bv;
				let mut modified = base_bv;

				if let Some(kinds) = enhancements.get(&record.id) {
					for kind in kinds {
						if enhancement_applies(*kind, item) {
							modified *= enhancement_multiplier(*kind);
						}
					}
				}

				modified *= arc_multiplier(item.location, item.rear_mounted);

				if record.one_shot {
					modified *= Decimal::new(5, 1);
				}

				Some((
					slot,
					OrderedWeapon {
						item,
						base_bv,
						modified_bv: crate::fixed::round4(modified),
					},
				))
			})
			.collect::<Vec<_>>();

		// Stable sort by descending modified BV; ties break on canonical id
		// then original slot index (§4.6).
		ordered.sort_by(|(slot_a, a), (slot_b, b)| {
			b.modified_bv
				.cmp(&a.modified_bv)
				.then_with(|| a.item.id.cmp(&b.item.id))
				.then_with(|| slot_a.cmp(slot_b))
		});

		ordered.into_iter().map(|(_, weapon)| weapon).collect()
	}
}

/// Map canonical weapon id -> enhancements linked to it, by walking every
/// non-weapon item whose `linked_item` resolves to a weapon on the unit.
fn collect_enhancement_links(normalized: &NormalizedUnit) -> HashMap<String, Vec<Enhancement>> {
	let mut links: HashMap<String, Vec<Enhancement>> = HashMap::new();

	for item in &normalized.items {
		let Some(record) = &item.record else { continue };
		let Some(kind) = classify_enhancement(&record.id) else { continue };
		let Some(target_id) = &item.linked_item else { continue };
		let target_key = normalize_id(target_id);

		if let Some(weapon) = normalized
			.weapons()
			.find(|w| normalize_id(&w.id) == target_key)
		{
			if let Some(weapon_record) = &weapon.record {
				links.entry(weapon_record.id.clone()).or_default().push(kind);
			}
		}
	}

	links
}
