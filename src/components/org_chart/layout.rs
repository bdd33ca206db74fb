//! Top-down tree layout with fixed-size cards.
//!
//! Children sit one row below their parent, side by side, with the parent
//! centered over them. In compact mode a parent whose children are all leaves
//! stacks them in a two-column grid instead, which keeps wide teams narrow.

use super::tree::OrgTree;

/// Sizing and spacing of the chart, all in layout units (CSS pixels at zoom 1).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
	pub node_width: f64,
	pub node_height: f64,
	/// Vertical gap between a parent row and its children row.
	pub children_margin: f64,
	/// Horizontal gap between neighbouring subtrees.
	pub siblings_margin: f64,
	/// Vertical gap between rows of a compact grid.
	pub compact_margin_between: f64,
	/// Horizontal gap between the two columns of a compact grid.
	pub compact_margin_pair: f64,
	pub compact: bool,
	/// Space kept free around the chart when fitting it to the container.
	pub fit_padding: f64,
	pub min_zoom: f64,
	pub max_zoom: f64,
}

impl Default for ChartOptions {
	fn default() -> Self {
		Self {
			node_width: 340.0,
			node_height: 120.0,
			children_margin: 50.0,
			siblings_margin: 20.0,
			compact_margin_between: 40.0,
			compact_margin_pair: 30.0,
			compact: true,
			fit_padding: 20.0,
			min_zoom: 0.1,
			max_zoom: 10.0,
		}
	}
}

/// A placed card. `x`/`y` are the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct CardBox {
	pub node: usize,
	pub x: f64,
	pub y: f64,
}

/// Polyline from a parent card to one of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	pub points: Vec<(f64, f64)>,
}

impl Connector {
	/// SVG path data for this connector.
	pub fn svg_path(&self) -> String {
		let mut d = String::new();
		for (i, (x, y)) in self.points.iter().enumerate() {
			let cmd = if i == 0 { 'M' } else { 'L' };
			if i > 0 {
				d.push(' ');
			}
			d.push_str(&format!("{cmd}{x},{y}"));
		}
		d
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
	pub cards: Vec<CardBox>,
	pub connectors: Vec<Connector>,
	bounds: Bounds,
}

impl ChartLayout {
	pub fn compute(tree: &OrgTree, options: &ChartOptions) -> Self {
		let widths = measure(tree, options);
		let mut layout = Self {
			cards: Vec::with_capacity(tree.len()),
			connectors: Vec::with_capacity(tree.len().saturating_sub(1)),
			bounds: Bounds::default(),
		};
		place(tree, options, &widths, &mut layout);

		layout.bounds = bounds_of(&layout.cards, options);
		log::debug!(
			"laid out {} cards in {:.0}x{:.0}",
			layout.cards.len(),
			layout.bounds.width(),
			layout.bounds.height()
		);
		layout
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}
}

fn is_compact_group(tree: &OrgTree, idx: usize, options: &ChartOptions) -> bool {
	let children = tree.children(idx);
	options.compact && children.len() >= 2 && children.iter().all(|&c| tree.is_leaf(c))
}

fn compact_grid_width(options: &ChartOptions) -> f64 {
	2.0 * options.node_width + options.compact_margin_pair
}

fn children_span(tree: &OrgTree, idx: usize, options: &ChartOptions, widths: &[f64]) -> f64 {
	let children = tree.children(idx);
	children.iter().map(|&c| widths[c]).sum::<f64>()
		+ options.siblings_margin * children.len().saturating_sub(1) as f64
}

/// Horizontal extent of every subtree, children before parents.
fn measure(tree: &OrgTree, options: &ChartOptions) -> Vec<f64> {
	// pre-order; walked backwards every child comes before its parent
	let mut order = Vec::with_capacity(tree.len());
	let mut stack = vec![tree.root()];
	while let Some(idx) = stack.pop() {
		order.push(idx);
		stack.extend(tree.children(idx).iter().copied());
	}

	let mut widths = vec![options.node_width; tree.len()];
	for &idx in order.iter().rev() {
		if tree.is_leaf(idx) {
			continue;
		}
		let extent = if is_compact_group(tree, idx, options) {
			compact_grid_width(options)
		} else {
			children_span(tree, idx, options, &widths)
		};
		widths[idx] = extent.max(options.node_width);
	}
	widths
}

/// Pre-order placement. Each stack entry is a subtree and the left/top corner of its slot.
fn place(tree: &OrgTree, options: &ChartOptions, widths: &[f64], layout: &mut ChartLayout) {
	let (w, h) = (options.node_width, options.node_height);
	let mut stack = vec![(tree.root(), 0.0, 0.0)];

	while let Some((idx, left, top)) = stack.pop() {
		let x = left + (widths[idx] - w) / 2.0;
		layout.cards.push(CardBox { node: idx, x, y: top });

		let children = tree.children(idx);
		if children.is_empty() {
			continue;
		}
		let child_top = top + h + options.children_margin;
		let parent_anchor = (x + w / 2.0, top + h);
		let elbow_y = top + h + options.children_margin / 2.0;

		if is_compact_group(tree, idx, options) {
			let pair = options.compact_margin_pair;
			let origin = left + (widths[idx] - compact_grid_width(options)) / 2.0;
			let trunk_x = origin + w + pair / 2.0;
			for (i, &child) in children.iter().enumerate() {
				let (col, row) = (i % 2, i / 2);
				let cx = origin + col as f64 * (w + pair);
				let cy = child_top + row as f64 * (h + options.compact_margin_between);
				layout.cards.push(CardBox {
					node: child,
					x: cx,
					y: cy,
				});
				let side_x = if col == 0 { cx + w } else { cx };
				layout.connectors.push(Connector {
					points: vec![
						parent_anchor,
						(parent_anchor.0, elbow_y),
						(trunk_x, elbow_y),
						(trunk_x, cy + h / 2.0),
						(side_x, cy + h / 2.0),
					],
				});
			}
			continue;
		}

		let mut cursor = left + (widths[idx] - children_span(tree, idx, options, widths)) / 2.0;
		let mut slots = Vec::with_capacity(children.len());
		for &child in children {
			let child_x = cursor + (widths[child] - w) / 2.0;
			layout.connectors.push(Connector {
				points: vec![
					parent_anchor,
					(parent_anchor.0, elbow_y),
					(child_x + w / 2.0, elbow_y),
					(child_x + w / 2.0, child_top),
				],
			});
			slots.push((child, cursor, child_top));
			cursor += widths[child] + options.siblings_margin;
		}
		// reversed so the first child is laid out first
		stack.extend(slots.into_iter().rev());
	}
}

fn bounds_of(cards: &[CardBox], options: &ChartOptions) -> Bounds {
	let mut iter = cards.iter();
	let Some(first) = iter.next() else {
		return Bounds::default();
	};
	let init = Bounds {
		min_x: first.x,
		min_y: first.y,
		max_x: first.x + options.node_width,
		max_y: first.y + options.node_height,
	};
	iter.fold(init, |b, c| Bounds {
		min_x: b.min_x.min(c.x),
		min_y: b.min_y.min(c.y),
		max_x: b.max_x.max(c.x + options.node_width),
		max_y: b.max_y.max(c.y + options.node_height),
	})
}
