//! BV 2.0 calculation engine: given a normalized BattleMech unit and an
//! equipment catalogue, computes the staged defensive/offensive Battle
//! Value pipeline and (optionally) validates it against a reference corpus.
//!
//! Entry points: [`assemble::calculate`] for a single unit,
//! [`validate::validate`] for a batch against reference values.

pub mod assemble;
pub mod catalogue;
pub mod defensive;
pub mod error;
pub mod fixed;
pub mod heat;
pub mod model;
pub mod movement;
pub mod normalize;
pub mod offensive;
pub mod speed_tonnage;
pub mod validate;
pub mod weapon_order;

pub use assemble::{CalculateOptions, PilotSkill, calculate};
pub use error::{BvError, Result};
pub use model::{BVBreakdown, Unit};
pub use validate::{BVValidationReport, ReferenceUnit, validate};

/// Crate version, surfaced in CLI output and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
