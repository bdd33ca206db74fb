use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div style="padding: 20px;">
			<h2>"Page not found"</h2>
			<p>"The org chart lives at "<a href="/">"/"</a>"."</p>
		</div>
	}
}
