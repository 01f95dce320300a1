//! Errors raised by the layout engine.

use thiserror::Error;

/// Out-of-domain input rejected before a simulation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
	#[error("invalid layout parameter `{name}` = {value}: {reason}")]
	InvalidParameter {
		name: &'static str,
		value: f64,
		reason: &'static str,
	},

	#[error("invalid canvas size {width}x{height}: both sides must be finite and positive")]
	InvalidCanvas { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
