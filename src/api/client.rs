use std::future::Future;

use gloo_net::http::Request;

use crate::components::org_chart::OrgNode;
use crate::config::ApiConfig;
use crate::error::LoadError;

pub const ORGCHART_PATH: &str = "/api/orgchart";

/// Status and body of an HTTP response, independent of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
}

pub fn orgchart_url(config: &ApiConfig) -> String {
	format!("{}{}", config.base_url(), ORGCHART_PATH)
}

/// GET the org chart through `get`, then check the status and decode the body.
pub async fn fetch_org_nodes_with<F, Fut>(
	config: &ApiConfig,
	get: F,
) -> Result<Vec<OrgNode>, LoadError>
where
	F: FnOnce(String) -> Fut,
	Fut: Future<Output = Result<RawResponse, LoadError>>,
{
	let url = orgchart_url(config);
	log::info!("fetching org chart from {url}");

	let response = get(url).await?;
	if !(200..300).contains(&response.status) {
		return Err(LoadError::Fetch {
			status: response.status,
		});
	}

	let nodes: Vec<OrgNode> =
		serde_json::from_str(&response.body).map_err(|e| LoadError::Decode {
			cause: e.to_string(),
		})?;
	log::debug!("received {} org nodes", nodes.len());
	Ok(nodes)
}

/// `fetch` transport. Non-success bodies are not read.
pub async fn browser_get(url: String) -> Result<RawResponse, LoadError> {
	let network = |e: gloo_net::Error| LoadError::Network {
		cause: e.to_string(),
	};

	let response = Request::get(&url).send().await.map_err(network)?;
	let status = response.status();
	if !response.ok() {
		return Ok(RawResponse {
			status,
			body: String::new(),
		});
	}
	let body = response.text().await.map_err(network)?;
	Ok(RawResponse { status, body })
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;

	use super::*;

	fn config() -> ApiConfig {
		ApiConfig::from_value(Some("https://api.example.com/")).unwrap()
	}

	fn respond(
		status: u16,
		body: &str,
	) -> impl FnOnce(String) -> std::future::Ready<Result<RawResponse, LoadError>> {
		let body = body.to_string();
		move |_| std::future::ready(Ok(RawResponse { status, body }))
	}

	#[test]
	fn builds_orgchart_url() {
		assert_eq!(orgchart_url(&config()), "https://api.example.com/api/orgchart");
	}

	#[test]
	fn requests_orgchart_path() {
		let mut requested = None;
		let result = block_on(fetch_org_nodes_with(&config(), |url| {
			requested = Some(url);
			std::future::ready(Ok(RawResponse {
				status: 200,
				body: "[]".into(),
			}))
		}));
		assert_eq!(result, Ok(vec![]));
		assert_eq!(requested.as_deref(), Some("https://api.example.com/api/orgchart"));
	}

	#[test]
	fn decodes_node_array() {
		let body = r#"[{"id":"1","parentId":null,"label":"CEO","vacant":false},
			{"id":"2","parentId":"1","label":"CFO","vacant":true}]"#;
		let nodes = block_on(fetch_org_nodes_with(&config(), respond(200, body))).unwrap();
		assert_eq!(nodes.len(), 2);
		assert!(nodes[1].vacant);
	}

	#[test]
	fn non_success_status_is_fetch_error() {
		let err = block_on(fetch_org_nodes_with(&config(), respond(500, "boom"))).unwrap_err();
		assert_eq!(err, LoadError::Fetch { status: 500 });
		assert!(err.to_string().contains("500"));
	}

	#[test]
	fn redirect_status_is_not_success() {
		let err = block_on(fetch_org_nodes_with(&config(), respond(304, ""))).unwrap_err();
		assert_eq!(err, LoadError::Fetch { status: 304 });
	}

	#[test]
	fn transport_failure_keeps_cause() {
		let err = block_on(fetch_org_nodes_with(&config(), |_| {
			std::future::ready(Err(LoadError::Network {
				cause: "connection refused".into(),
			}))
		}))
		.unwrap_err();
		assert_eq!(err.to_string(), "connection refused");
	}

	#[test]
	fn non_array_body_is_decode_error() {
		let err =
			block_on(fetch_org_nodes_with(&config(), respond(200, r#"{"nodes":[]}"#))).unwrap_err();
		assert!(matches!(err, LoadError::Decode { .. }));
	}
}
