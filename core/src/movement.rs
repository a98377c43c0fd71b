//! Movement derivation (spec §4.3 / C3).
//!
//! New arithmetic with no direct teacher precedent — fcsgen's closest
//! analogue is `ballistic.rs`'s small table-driven physics helpers (a free
//! function per named quantity, each unit-tested in isolation), which this
//! module follows: one function per derived MP value rather than one large
//! method.

use rust_decimal::Decimal;

use crate::fixed::floor_to_u32;
use crate::model::{JumpType, Movement};

/// MASC/Supercharger/TSM-derived movement, consumed by the defensive (§4.4)
/// and speed/tonnage (§4.8) stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementProfile {
	pub walk_mp: u32,
	pub run_mp: u32,
	pub jump_mp: u32,
	pub jump_type: JumpType,
}

impl MovementProfile {
	/// Derive from the unit's raw [`Movement`] record.
	#[must_use]
	pub fn derive(movement: &Movement) -> Self {
		let walk_mp = effective_walk_mp(movement);
		let run_mp = effective_run_mp_base(walk_mp, movement);

		Self {
			walk_mp,
			run_mp,
			jump_mp: movement.jump_mp,
			jump_type: movement.jump_type,
		}
	}

	/// `max(runningMP, jumpingMP × jump-type weight)` (§4.3, §4.8).
	///
	/// Units are MP "points", not yet the speed factor itself — that table
	/// lookup belongs to [`crate::speed_tonnage`].
	#[must_use]
	pub fn effective_run_mp(&self) -> Decimal {
		let weighted_jump = Decimal::from(self.jump_mp) * jump_weight(self.jump_type);
		Decimal::from(self.run_mp).max(weighted_jump)
	}
}

/// Walking MP, with TSM's +2 applied when installed (spec §4.3: BV treats
/// TSM as always active when present).
fn effective_walk_mp(movement: &Movement) -> u32 {
	if movement.tsm {
		movement.walk_mp + 2
	} else {
		movement.walk_mp
	}
}

/// Running MP: `walk + ceil(walk / 2)`, plus MASC/Supercharger bonuses
/// (each `floor(walk × 0.5)`, stacking), capped at `2 × walk`.
fn effective_run_mp_base(walk_mp: u32, movement: &Movement) -> u32 {
	let base = walk_mp + walk_mp.div_ceil(2);

	let half_walk = floor_to_u32(Decimal::from(walk_mp) * Decimal::new(5, 1));
	let mut run = base;
	if movement.masc {
		run += half_walk;
	}
	if movement.supercharger {
		run += half_walk;
	}

	run.min(2 * walk_mp)
}

/// Jump-type weight used when computing effective running MP (§4.3/§4.8).
/// UMU is treated as an ordinary jump of equal MP, so it shares Standard's
/// weight.
#[must_use]
pub fn jump_weight(jump_type: JumpType) -> Decimal {
	match jump_type {
		JumpType::Standard | JumpType::Umu => Decimal::new(5, 1),
		JumpType::Improved => Decimal::new(75, 2),
		JumpType::Mechanical => Decimal::ONE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn movement(walk: u32) -> Movement {
		Movement {
			walk_mp: walk,
			jump_mp: 0,
			jump_type: JumpType::Standard,
			masc: false,
			supercharger: false,
			tsm: false,
		}
	}

	#[test]
	fn plain_walk_run_uses_ceil_half() {
		let profile = MovementProfile::derive(&movement(4));
		assert_eq!(profile.walk_mp, 4);
		assert_eq!(profile.run_mp, 6);
	}

	#[test]
	fn masc_and_supercharger_stack_but_cap_at_double_walk() {
		let mut m = movement(4);
		m.masc = true;
		m.supercharger = true;
		let profile = MovementProfile::derive(&m);
		// base 6 + 2 + 2 = 10, capped at 2*4 = 8
		assert_eq!(profile.run_mp, 8);
	}

	#[test]
	fn tsm_adds_two_walk_and_propagates_to_run() {
		let mut m = movement(4);
		m.tsm = true;
		let profile = MovementProfile::derive(&m);
		assert_eq!(profile.walk_mp, 6);
		assert_eq!(profile.run_mp, 9);
	}

	#[test]
	fn jump_weight_can_exceed_running_mp() {
		let mut m = movement(2);
		m.jump_mp = 6;
		let profile = MovementProfile::derive(&m);
		// run = 2 + 1 = 3; jump weighted = 6 * 0.5 = 3.0 -> tie, not exceeding
		assert_eq!(profile.effective_run_mp(), Decimal::new(30, 1));
	}

	#[test]
	fn improved_jump_jets_weight_higher_than_standard() {
		let mut m = movement(2);
		m.jump_mp = 4;
		m.jump_type = JumpType::Improved;
		let profile = MovementProfile::derive(&m);
		// run = 3; jump weighted = 4 * 0.75 = 3.0
		assert_eq!(profile.effective_run_mp(), Decimal::new(30, 1));
	}
}
