use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Window vertical scroll offset, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || scroll_y.set(current_scroll_y())
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    scroll_y.set(current_scroll_y());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    *scroll_y
}

/// Maps how far a section has scrolled out of view onto a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParallax {
    pub range_px: f64,
}

impl ScrollParallax {
    pub const fn new(range_px: f64) -> Self {
        Self { range_px }
    }

    pub fn offset(&self, progress: f64) -> f64 {
        progress.clamp(0.0, 1.0) * self.range_px
    }
}

/// 0 while the section's top is at or below the viewport top, 1 once its
/// bottom has passed the viewport top.
pub fn section_progress(scroll_y: f64, section_top: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    ((scroll_y - section_top) / section_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_through_section() {
        assert_eq!(section_progress(0.0, 0.0, 800.0), 0.0);
        assert_eq!(section_progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(section_progress(2000.0, 0.0, 800.0), 1.0);
        assert_eq!(section_progress(100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_layers_move_at_different_rates() {
        let progress = section_progress(400.0, 0.0, 800.0);
        assert_eq!(ScrollParallax::new(150.0).offset(progress), 75.0);
        assert_eq!(ScrollParallax::new(100.0).offset(progress), 50.0);
        assert_eq!(ScrollParallax::new(200.0).offset(progress), 100.0);
    }
}
