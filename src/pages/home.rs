use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::browser_get;
use crate::components::org_chart::OrgChart;
use crate::config::build_api_url;
use crate::load::{LoadState, load_org_chart};

/// The org chart page. Loads the chart once per mount.
#[component]
pub fn OrgChartView() -> impl IntoView {
	let load_state = RwSignal::new(LoadState::Idle);

	if load_state.try_update(LoadState::begin).unwrap_or(false) {
		spawn_local(async move {
			let result = load_org_chart(build_api_url(), browser_get).await;
			if let Err(err) = &result {
				log::error!("org chart failed to load ({:?}): {err}", err.kind());
			}
			// the view may have been unmounted while the request was in flight
			if load_state.try_update(|s| s.finish(result)).is_none() {
				log::debug!("org chart view gone before load finished");
			}
		});
	}

	let tree = Signal::derive(move || load_state.with(|s| s.tree().cloned()));
	let error = move || load_state.with(|s| s.error().map(ToString::to_string));
	let loading = move || load_state.with(LoadState::is_loading);

	view! {
		<div style="padding: 20px;">
			<h2>"Org Chart"</h2>

			<Show when=loading>
				<p class="org-chart-loading" style="color: #777; margin-bottom: 10px;">
					"Loading org chart..."
				</p>
			</Show>

			{move || {
				error()
					.map(|msg| {
						view! {
							<div class="org-chart-error" style="color: red; margin-bottom: 10px;">
								"Error: " {msg}
							</div>
						}
					})
			}}

			<OrgChart tree=tree />
		</div>
	}
}
