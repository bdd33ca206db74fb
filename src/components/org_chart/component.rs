use leptos::prelude::*;
use web_sys::{Element, MouseEvent, WheelEvent};

use super::card::{CardContent, NodeCard};
use super::handle::ChartHandle;
use super::layout::ChartOptions;
use super::state::ChartState;
use super::tree::OrgTree;

const LINK_COLOR: &str = "#9e9e9e";

/// Renders `tree` into an 80vh, full-width container. `None` leaves the container empty.
///
/// Every new tree replaces the previous chart outright and refits the view.
/// Drag the background to pan, scroll to zoom.
#[component]
pub fn OrgChart(
	#[prop(into)] tree: Signal<Option<OrgTree>>,
	#[prop(optional)] options: ChartOptions,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(ChartState::new(options, 800.0, 600.0));
	let handle = StoredValue::new_local(None::<ChartHandle>);

	Effect::new(move |_| {
		let tree = tree.get();
		let Some(container) = container_ref.get() else {
			return;
		};
		let (w, h) = container_size(&container);
		state.update(|s| {
			s.resize(w, h);
			match tree {
				Some(tree) => s.replace(tree),
				None => s.clear(),
			}
		});

		if handle.with_value(Option::is_none) {
			let resize_target = container.clone();
			handle.set_value(ChartHandle::init(move || {
				let (w, h) = container_size(&resize_target);
				state.update(|s| {
					s.resize(w, h);
					s.fit();
				});
			}));
		}
	});

	on_cleanup(move || {
		handle.update_value(|h| {
			if let Some(mut h) = h.take() {
				h.dispose();
			}
		});
	});

	let local_point = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let container = container_ref.get_untracked()?;
		let rect = container.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y)) = local_point(&ev) {
			state.update(|s| s.pan_start(x, y));
		}
	};
	let on_mousemove = move |ev: MouseEvent| {
		if !state.with_untracked(|s| s.pan.active) {
			return;
		}
		if let Some((x, y)) = local_point(&ev) {
			state.update(|s| s.pan_move(x, y));
		}
	};
	let on_mouseup = move |_: MouseEvent| state.update(|s| s.pan_end());
	let on_mouseleave = move |_: MouseEvent| state.update(|s| s.pan_end());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y)) = local_point(&*ev) {
			state.update(|s| s.zoom_at(x, y, ev.delta_y()));
		}
	};

	// Cards and links only rebuild when the tree changes, not on every pan/zoom.
	let revision = Memo::new(move |_| state.with(|s| s.revision));
	let surface_style = move || {
		format!(
			"position:absolute;left:0;top:0;transform-origin:0 0;transform:{};",
			state.with(|s| s.transform.css())
		)
	};
	let links_size = move || {
		revision.track();
		state.with_untracked(|s| s.layout.bounds())
	};
	let links = move || {
		revision.track();
		state.with_untracked(|s| {
			s.layout
				.connectors
				.iter()
				.map(|c| {
					view! { <path d=c.svg_path() fill="none" stroke=LINK_COLOR stroke-width="1.5" /> }
				})
				.collect_view()
		})
	};
	let cards = move || {
		revision.track();
		state.with_untracked(|s| {
			let (width, height) = (s.options.node_width, s.options.node_height);
			s.tree.as_ref().map(|tree| {
				s.layout
					.cards
					.iter()
					.map(|c| {
						let content = CardContent::from_node(tree.node(c.node));
						view! { <NodeCard content x=c.x y=c.y width height /> }
					})
					.collect_view()
			})
		})
	};

	view! {
		<div
			node_ref=container_ref
			class="org-chart-container"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="position: relative; height: 80vh; width: 100%; overflow: hidden; cursor: grab;"
		>
			<div class="org-chart-surface" style=surface_style>
				<svg
					class="org-chart-links"
					style="position:absolute;left:0;top:0;overflow:visible;"
					width=move || links_size().max_x.to_string()
					height=move || links_size().max_y.to_string()
				>
					{links}
				</svg>
				{cards}
			</div>
		</div>
	}
}

/// Container size in CSS pixels, falling back to 800x600 before layout has happened.
fn container_size(container: &Element) -> (f64, f64) {
	let (w, h) = (container.client_width(), container.client_height());
	(
		if w > 0 { w as f64 } else { 800.0 },
		if h > 0 { h as f64 } else { 600.0 },
	)
}
