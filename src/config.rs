//! API location, baked in at build time.

use crate::error::LoadError;

/// The raw `ORGCHART_API_URL` the build was made with, if any.
pub fn build_api_url() -> Option<&'static str> {
	option_env!("ORGCHART_API_URL")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	base_url: String,
}

impl ApiConfig {
	/// Blank values count as missing. Trailing slashes are dropped.
	pub fn from_value(value: Option<&str>) -> Result<Self, LoadError> {
		let base_url = value
			.map(|v| v.trim().trim_end_matches('/'))
			.filter(|v| !v.is_empty())
			.ok_or(LoadError::Configuration)?;
		Ok(Self {
			base_url: base_url.to_string(),
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}
