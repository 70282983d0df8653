// Drives a frame callback from requestAnimationFrame until stopped.
//
// The callback re-requests itself after every frame while the loop is running.
// `stop` cancels the pending request and drops the callback, and so does
// dropping the AnimationLoop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Window};

struct LoopInner {
    window: Option<Window>,
    callback: Option<Closure<dyn FnMut()>>,
    request_id: Option<i32>,
    running: bool,
}

pub struct AnimationLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        AnimationLoop {
            inner: Rc::new(RefCell::new(LoopInner {
                window: None,
                callback: None,
                request_id: None,
                running: false,
            })),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    // `frame` must not stop this loop from inside itself
    pub fn start<F>(&mut self, window: &Window, mut frame: F) -> Result<(), JsValue>
    where
        F: FnMut() -> Result<(), JsValue> + 'static,
    {
        self.stop();

        let weak: Weak<RefCell<LoopInner>> = Rc::downgrade(&self.inner);
        let callback = Closure::wrap(Box::new(move || {
            let inner = match weak.upgrade() {
                Some(inner) => inner,
                None => return,
            };
            if !inner.borrow().running {
                return;
            }

            if let Err(err) = frame() {
                console::error_1(&err);
            }

            let mut state = inner.borrow_mut();
            if let Err(err) = state.request_next() {
                console::error_1(&err);
                state.running = false;
            }
        }) as Box<dyn FnMut()>);

        let mut state = self.inner.borrow_mut();
        state.window = Some(window.clone());
        state.callback = Some(callback);
        state.running = true;
        state.schedule_first()
    }

    pub fn stop(&mut self) {
        let mut guard = self.inner.borrow_mut();
        let state = &mut *guard;
        state.running = false;
        if let (Some(window), Some(id)) = (state.window.as_ref(), state.request_id.take()) {
            if let Err(err) = window.cancel_animation_frame(id) {
                console::error_1(&err);
            }
        }
        state.callback = None;
    }
}

impl LoopInner {
    // A loop whose first frame could not be requested is not running
    fn schedule_first(&mut self) -> Result<(), JsValue> {
        let scheduled = self.request_next();
        if scheduled.is_err() {
            self.running = false;
            self.request_id = None;
            self.callback = None;
        }
        scheduled
    }

    fn request_next(&mut self) -> Result<(), JsValue> {
        if !self.running {
            return Ok(());
        }
        let window = self
            .window
            .as_ref()
            .ok_or_else(|| JsValue::from_str("animation loop has no window"))?;
        let callback = self
            .callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("animation loop has no frame callback"))?;
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.request_id = Some(id);
        Ok(())
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        AnimationLoop::new()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn failed_first_request_leaves_loop_stopped() {
        let mut state = LoopInner {
            window: None,
            callback: Some(Closure::wrap(Box::new(|| {}) as Box<dyn FnMut()>)),
            request_id: None,
            running: true,
        };
        assert!(state.schedule_first().is_err());
        assert!(!state.running);
        assert!(state.callback.is_none());
    }

    #[wasm_bindgen_test]
    fn start_and_stop() {
        let window = web_sys::window().unwrap();
        let mut animation = AnimationLoop::new();
        animation.start(&window, || Ok(())).unwrap();
        assert!(animation.is_running());
        animation.stop();
        assert!(!animation.is_running());
    }
}
