//! Data model shared by every pipeline stage.

pub mod breakdown;
pub mod equipment;
pub mod unit;

pub use breakdown::{
	AmmoDiagnostic, BVBreakdown, Classification, DefensiveDiagnostic, Diagnostics, FiringArc,
	Warning, WeaponDiagnostic,
};
pub use equipment::{ClusterInfo, EquipmentCategory, EquipmentRecord, Ranges};
pub use unit::{
	Armor, ArmorType, CockpitType, Configuration, Engine, EngineType, EquipmentItem, GyroType,
	HeatSinkType, HeatSinks, JumpType, Location, LocationArmor, Movement, StructurePoints,
	StructureType, TechBase, Unit,
};
