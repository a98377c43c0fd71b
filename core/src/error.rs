//! Error types for BV calculation.

use thiserror::Error;

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, BvError>;

/// Errors that can occur while normalizing a unit or computing its BV.
///
/// `UnknownEquipment` is deliberately not represented here — per the error
/// taxonomy it never aborts a calculation. It is surfaced instead as a
/// [`crate::model::breakdown::Warning`] on the resulting [`crate::model::breakdown::BVBreakdown`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BvError {
	/// The unit's tech base / configuration / equipment combination cannot
	/// physically exist (e.g. a Clan XL engine on an Inner-Sphere-only
	/// chassis flag).
	#[error("unsupported configuration in {context}: {message}")]
	UnsupportedConfiguration { context: String, message: String },

	/// A required numeric field was missing, negative, or otherwise
	/// structurally invalid (non-numeric tonnage, negative armor, etc.).
	#[error("invalid input in {context}: {message}")]
	InvalidInput { context: String, message: String },
}

impl BvError {
	/// Build an [`BvError::UnsupportedConfiguration`].
	pub fn unsupported(context: impl Into<String>, message: impl Into<String>) -> Self {
		Self::UnsupportedConfiguration {
			context: context.into(),
			message: message.into(),
		}
	}

	/// Build an [`BvError::InvalidInput`].
	pub fn invalid(context: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidInput {
			context: context.into(),
			message: message.into(),
		}
	}
}
