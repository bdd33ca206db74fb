//! HTTP access to the org chart API.

mod client;

pub use client::{RawResponse, browser_get, fetch_org_nodes_with};
