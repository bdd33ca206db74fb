use leptos::prelude::*;

use super::types::OrgNode;

pub const VACANT_COLOR: &str = "#b00020";
pub const FILLED_COLOR: &str = "#2e7d32";

/// Display strings for one card. Missing optional fields render as "".
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
	pub label: String,
	pub vacancy_text: &'static str,
	pub vacancy_color: &'static str,
	pub department: String,
	pub location: String,
	pub salary: String,
	pub combo_code: String,
}

impl CardContent {
	pub fn from_node(node: &OrgNode) -> Self {
		let (vacancy_text, vacancy_color) = if node.vacant {
			("VACANT", VACANT_COLOR)
		} else {
			("", FILLED_COLOR)
		};
		Self {
			label: node.label.clone(),
			vacancy_text,
			vacancy_color,
			department: node.department.clone().unwrap_or_default(),
			location: node.location.clone().unwrap_or_default(),
			salary: node
				.salary
				.as_ref()
				.map(ToString::to_string)
				.unwrap_or_default(),
			combo_code: node.combo_code.clone().unwrap_or_default(),
		}
	}
}

/// One positioned org chart card.
#[component]
pub fn NodeCard(content: CardContent, x: f64, y: f64, width: f64, height: f64) -> impl IntoView {
	let CardContent {
		label,
		vacancy_text,
		vacancy_color,
		department,
		location,
		salary,
		combo_code,
	} = content;

	view! {
		<div
			class="org-card"
			style=format!(
				"position:absolute;left:{x}px;top:{y}px;width:{width}px;height:{height}px;\
				box-sizing:border-box;overflow:hidden;border:1px solid #ddd;border-radius:12px;\
				padding:12px;background:#fff;box-shadow:0 1px 4px rgba(0,0,0,0.08);font-family:Arial;"
			)
		>
			<div style="display:flex;justify-content:space-between;gap:10px;align-items:flex-start;">
				<div class="org-card-label" style="font-size:14px;font-weight:700;line-height:1.2;">
					{label}
				</div>
				<div
					class="org-card-vacancy"
					style=format!("font-size:11px;font-weight:700;color:{vacancy_color};")
				>
					{vacancy_text}
				</div>
			</div>
			<div style="font-size:12px;color:#444;margin-top:8px;">"Dept: " {department}</div>
			<div style="font-size:12px;color:#444;">"Location: " {location}</div>
			<div style="font-size:12px;color:#444;">"Salary: " {salary}</div>
			<div style="font-size:11px;color:#777;margin-top:8px;">"Combo: " {combo_code}</div>
		</div>
	}
}
