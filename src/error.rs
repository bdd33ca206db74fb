//! Failure kinds of the load-and-render flow.

use thiserror::Error;

use crate::components::org_chart::TreeError;

/// Shown when the API base URL was not configured at build time.
pub const CONFIGURATION_MESSAGE: &str =
	"Missing ORGCHART_API_URL. Set it in the build environment, then redeploy.";

/// Everything that can stop the org chart from rendering.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
	#[error("{}", CONFIGURATION_MESSAGE)]
	Configuration,
	#[error("API error: {status}")]
	Fetch { status: u16 },
	#[error("{cause}")]
	Network { cause: String },
	#[error("Invalid org chart data: {cause}")]
	Decode { cause: String },
	#[error(transparent)]
	Render(#[from] TreeError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	Configuration,
	Fetch,
	Network,
	Decode,
	Render,
}

impl LoadError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			LoadError::Configuration => ErrorKind::Configuration,
			LoadError::Fetch { .. } => ErrorKind::Fetch,
			LoadError::Network { .. } => ErrorKind::Network,
			LoadError::Decode { .. } => ErrorKind::Decode,
			LoadError::Render(_) => ErrorKind::Render,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages() {
		assert_eq!(LoadError::Configuration.to_string(), CONFIGURATION_MESSAGE);
		assert_eq!(LoadError::Fetch { status: 503 }.to_string(), "API error: 503");
		assert_eq!(
			LoadError::Network {
				cause: "Failed to fetch".into()
			}
			.to_string(),
			"Failed to fetch"
		);
		assert_eq!(
			LoadError::from(TreeError::NoRoot).to_string(),
			"org chart has no root node"
		);
	}

	#[test]
	fn kinds() {
		assert_eq!(LoadError::Fetch { status: 404 }.kind(), ErrorKind::Fetch);
		assert_eq!(LoadError::Configuration.kind(), ErrorKind::Configuration);
		assert_eq!(LoadError::from(TreeError::Empty).kind(), ErrorKind::Render);
	}
}
