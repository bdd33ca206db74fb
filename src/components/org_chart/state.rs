use super::layout::{ChartLayout, ChartOptions};
use super::tree::OrgTree;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// CSS `transform` value for the chart surface.
	pub fn css(&self) -> String {
		format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// The rendered chart: the tree it shows, its layout, and the current view.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
	pub options: ChartOptions,
	pub tree: Option<OrgTree>,
	pub layout: ChartLayout,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	/// Bumped whenever the shown tree changes, so views can skip pan/zoom updates.
	pub revision: u64,
}

impl ChartState {
	pub fn new(options: ChartOptions, width: f64, height: f64) -> Self {
		Self {
			options,
			tree: None,
			layout: ChartLayout::default(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
			revision: 0,
		}
	}

	/// Drops whatever was shown before and lays out `tree` from scratch, fitted to the view.
	pub fn replace(&mut self, tree: OrgTree) {
		self.layout = ChartLayout::compute(&tree, &self.options);
		self.tree = Some(tree);
		self.pan = PanState::default();
		self.revision += 1;
		self.fit();
	}

	pub fn clear(&mut self) {
		self.tree = None;
		self.layout = ChartLayout::default();
		self.transform = ViewTransform::default();
		self.pan = PanState::default();
		self.revision += 1;
	}

	/// Scale and center the layout inside the container, keeping `fit_padding` free.
	pub fn fit(&mut self) {
		if self.layout.is_empty() {
			self.transform = ViewTransform::default();
			return;
		}
		let bounds = self.layout.bounds();
		let pad = self.options.fit_padding;
		let (avail_w, avail_h) = (
			(self.width - 2.0 * pad).max(1.0),
			(self.height - 2.0 * pad).max(1.0),
		);
		let k = (avail_w / bounds.width())
			.min(avail_h / bounds.height())
			.clamp(self.options.min_zoom, self.options.max_zoom);

		self.transform = ViewTransform {
			x: self.width / 2.0 - (bounds.min_x + bounds.width() / 2.0) * k,
			y: self.height / 2.0 - (bounds.min_y + bounds.height() / 2.0) * k,
			k,
		};
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Zoom by one wheel notch around the screen point `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(self.options.min_zoom, self.options.max_zoom);
		let (gx, gy) = self.screen_to_graph(x, y);
		self.transform = ViewTransform {
			x: x - gx * new_k,
			y: y - gy * new_k,
			k: new_k,
		};
	}

	pub fn pan_start(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_move(&mut self, x: f64, y: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	pub fn pan_end(&mut self) {
		self.pan.active = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::tree::tests::node;

	fn small_tree() -> OrgTree {
		OrgTree::build(vec![
			node("1", None),
			node("2", Some("1")),
			node("3", Some("1")),
		])
		.unwrap()
	}

	fn assert_close(a: f64, b: f64) {
		assert!((a - b).abs() < 1e-9, "{a} != {b}");
	}

	#[test]
	fn replace_discards_previous_cards() {
		let mut state = ChartState::new(ChartOptions::default(), 1200.0, 800.0);
		state.replace(small_tree());
		assert_eq!(state.layout.cards.len(), 3);

		state.replace(OrgTree::build(vec![node("a", None), node("b", Some("a"))]).unwrap());
		assert_eq!(state.layout.cards.len(), 2);
		let ids: Vec<&str> = state
			.layout
			.cards
			.iter()
			.map(|c| state.tree.as_ref().unwrap().node(c.node).id.as_str())
			.collect();
		assert_eq!(ids, ["a", "b"]);
	}

	#[test]
	fn replace_is_idempotent() {
		let mut state = ChartState::new(ChartOptions::default(), 1200.0, 800.0);
		state.replace(small_tree());
		let first = state.clone();
		state.replace(small_tree());
		assert_eq!(state.layout, first.layout);
		assert_eq!(state.transform, first.transform);
		assert_eq!(state.revision, first.revision + 1);
	}

	#[test]
	fn fit_centers_layout_inside_container() {
		let mut state = ChartState::new(ChartOptions::default(), 400.0, 300.0);
		state.replace(small_tree());

		let b = state.layout.bounds();
		let t = &state.transform;
		let (left, right) = (b.min_x * t.k + t.x, b.max_x * t.k + t.x);
		let (top, bottom) = (b.min_y * t.k + t.y, b.max_y * t.k + t.y);
		assert!(left >= 20.0 - 1e-9 && right <= 380.0 + 1e-9);
		assert!(top >= 20.0 - 1e-9 && bottom <= 280.0 + 1e-9);
		assert_close((left + right) / 2.0, 200.0);
		assert_close((top + bottom) / 2.0, 150.0);
	}

	#[test]
	fn zoom_keeps_point_under_cursor() {
		let mut state = ChartState::new(ChartOptions::default(), 800.0, 600.0);
		state.replace(small_tree());
		let before = state.screen_to_graph(300.0, 200.0);
		state.zoom_at(300.0, 200.0, -1.0);
		let after = state.screen_to_graph(300.0, 200.0);
		assert_close(before.0, after.0);
		assert_close(before.1, after.1);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = ChartState::new(ChartOptions::default(), 800.0, 600.0);
		for _ in 0..200 {
			state.zoom_at(0.0, 0.0, 1.0);
		}
		assert_close(state.transform.k, 0.1);
	}

	#[test]
	fn pan_translates_view() {
		let mut state = ChartState::new(ChartOptions::default(), 800.0, 600.0);
		state.pan_start(10.0, 10.0);
		state.pan_move(40.0, -5.0);
		state.pan_end();
		state.pan_move(100.0, 100.0);
		assert_eq!(state.transform.x, 30.0);
		assert_eq!(state.transform.y, -15.0);
	}

	#[test]
	fn clear_empties_chart() {
		let mut state = ChartState::new(ChartOptions::default(), 800.0, 600.0);
		state.replace(small_tree());
		state.clear();
		assert!(state.tree.is_none());
		assert!(state.layout.is_empty());
	}
}
