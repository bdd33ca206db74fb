//! The one-shot load of the org chart and the view states around it.

use std::future::Future;

use crate::api::{RawResponse, fetch_org_nodes_with};
use crate::components::org_chart::OrgTree;
use crate::config::ApiConfig;
use crate::error::LoadError;

/// `Idle → Loading → {Rendered | Errored}`; there is no way back to `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
	#[default]
	Idle,
	Loading,
	Rendered(OrgTree),
	Errored(LoadError),
}

impl LoadState {
	/// `Idle → Loading`. Returns whether the transition happened.
	pub fn begin(&mut self) -> bool {
		if *self != LoadState::Idle {
			log::warn!("ignoring load start in state {}", self.name());
			return false;
		}
		*self = LoadState::Loading;
		true
	}

	/// `Loading → Rendered | Errored`. Returns whether the transition happened.
	pub fn finish(&mut self, result: Result<OrgTree, LoadError>) -> bool {
		if *self != LoadState::Loading {
			log::warn!("ignoring load result in state {}", self.name());
			return false;
		}
		*self = match result {
			Ok(tree) => LoadState::Rendered(tree),
			Err(err) => LoadState::Errored(err),
		};
		true
	}

	pub fn tree(&self) -> Option<&OrgTree> {
		match self {
			LoadState::Rendered(tree) => Some(tree),
			_ => None,
		}
	}

	pub fn error(&self) -> Option<&LoadError> {
		match self {
			LoadState::Errored(err) => Some(err),
			_ => None,
		}
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, LoadState::Loading)
	}

	fn name(&self) -> &'static str {
		match self {
			LoadState::Idle => "idle",
			LoadState::Loading => "loading",
			LoadState::Rendered(_) => "rendered",
			LoadState::Errored(_) => "errored",
		}
	}
}

/// Resolve the configuration, fetch the nodes through `get` and validate them into a tree.
///
/// A missing `base_url` fails before `get` is called.
pub async fn load_org_chart<F, Fut>(base_url: Option<&str>, get: F) -> Result<OrgTree, LoadError>
where
	F: FnOnce(String) -> Fut,
	Fut: Future<Output = Result<RawResponse, LoadError>>,
{
	let config = ApiConfig::from_value(base_url)?;
	let nodes = fetch_org_nodes_with(&config, get).await?;
	let tree = OrgTree::build(nodes)?;
	log::info!("org chart loaded with {} positions", tree.len());
	Ok(tree)
}
