use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;

/// One-way visibility flag: flips to visible on the first intersection and
/// never flips back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    seen: bool,
}

impl InViewLatch {
    /// Feed an observation. Returns true only for the observation that
    /// latched.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.seen || !intersecting {
            return false;
        }
        self.seen = true;
        true
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.seen
    }
}

/// Keeps an observer and its callback alive; disconnects on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` once, the first time `element` intersects the viewport
/// shrunk by `root_margin`.
pub fn observe_once(
    element: &Element,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Result<ObserverGuard, DomError> {
    let mut latch = InViewLatch::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });
        if latch.observe(intersecting) {
            observer.disconnect();
            on_visible();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Whether the element behind `node` has been in view at least once.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let guard = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = visible.setter();
                        match observe_once(&element, root_margin, move || setter.set(true)) {
                            Ok(guard) => Some(guard),
                            Err(err) => {
                                // Never leave content stuck in its hidden pose.
                                warn!("viewport observer unavailable: {}", err);
                                visible.set(true);
                                None
                            }
                        }
                    }
                    None => None,
                };
                move || drop(guard)
            },
            node,
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_intersection_only() {
        let mut latch = InViewLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        assert!(latch.observe(true));
        assert!(latch.is_visible());

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }
}
