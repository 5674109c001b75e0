use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::DomError;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    handle: Option<i32>,
    last_ts: Option<f64>,
    running: bool,
    closure: Option<FrameCallback>,
}

/// Runs a callback once per display frame until it returns `false` or the
/// loop is dropped. The callback receives the milliseconds since the
/// previous frame (0 on the first).
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let state = Rc::new(RefCell::new(LoopState {
            handle: None,
            last_ts: None,
            running: true,
            closure: None,
        }));

        let weak = Rc::downgrade(&state);
        let closure: FrameCallback = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let dt = {
                let mut s = state.borrow_mut();
                s.handle = None;
                if !s.running {
                    return;
                }
                let dt = s.last_ts.map(|last| ts - last).unwrap_or(0.0);
                s.last_ts = Some(ts);
                dt
            };

            let keep_going = on_frame(dt);

            let mut s = state.borrow_mut();
            if !keep_going || !s.running {
                s.running = false;
                return;
            }
            if let (Some(window), Some(cb)) = (web_sys::window(), s.closure.as_ref()) {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => s.handle = Some(handle),
                    Err(_) => s.running = false,
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("requestAnimationFrame", e))?;
        {
            let mut s = state.borrow_mut();
            s.handle = Some(handle);
            s.closure = Some(closure);
        }

        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn stop(&self) {
        let mut s = self.state.borrow_mut();
        s.running = false;
        if let Some(handle) = s.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
            debug!("frame loop cancelled");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Dropping the closure while the browser holds no pending frame.
        self.state.borrow_mut().closure.take();
    }
}
