// DOM helpers: the exclusion zone over the profile card and event listeners
// that unregister themselves when dropped

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, EventTarget};

/// Axis-aligned screen rectangle where ambient movement spawns nothing.
/// Edges count as inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExclusionZone {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ExclusionZone {
    pub const DEFAULT_SELECTOR: &'static str = ".glass";

    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        ExclusionZone {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    // Current bounding rect of the first element matching `selector`,
    // None when nothing matches
    pub fn from_selector(document: &Document, selector: &str) -> Result<Option<Self>, JsValue> {
        let element = match document.query_selector(selector)? {
            Some(element) => element,
            None => return Ok(None),
        };
        let rect = element.get_bounding_client_rect();
        Ok(Some(ExclusionZone::new(
            rect.left(),
            rect.top(),
            rect.right(),
            rect.bottom(),
        )))
    }
}

pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(EventListener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            console::error_1(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside() {
        let zone = ExclusionZone::new(10.0, 20.0, 110.0, 220.0);
        assert!(zone.contains(10.0, 20.0));
        assert!(zone.contains(110.0, 220.0));
        assert!(zone.contains(60.0, 100.0));
    }

    #[test]
    fn outside_points() {
        let zone = ExclusionZone::new(10.0, 20.0, 110.0, 220.0);
        assert!(!zone.contains(9.99, 100.0));
        assert!(!zone.contains(60.0, 220.01));
        assert!(!zone.contains(-5.0, -5.0));
    }
}
