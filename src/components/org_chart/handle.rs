use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Owned browser-side resources of a mounted chart.
///
/// Created once per mount by [`ChartHandle::init`]; [`ChartHandle::dispose`]
/// detaches the window listeners. Dropping the handle disposes it too.
pub struct ChartHandle {
	window: Window,
	on_resize: Option<Closure<dyn FnMut()>>,
}

impl ChartHandle {
	/// Registers `on_resize` for window resizes. `None` outside a browser window.
	pub fn init(on_resize: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let on_resize = Closure::<dyn FnMut()>::new(on_resize);
		if let Err(err) =
			window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
		{
			log::warn!("could not watch window resizes: {err:?}");
		}
		Some(Self {
			window,
			on_resize: Some(on_resize),
		})
	}

	pub fn dispose(&mut self) {
		if let Some(cb) = self.on_resize.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			log::debug!("org chart handle disposed");
		}
	}
}

impl Drop for ChartHandle {
	fn drop(&mut self) {
		self.dispose();
	}
}
