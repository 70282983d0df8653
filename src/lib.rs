mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod dom;
pub mod particle;
pub mod random;
pub mod simulation;
pub mod store;
pub mod surface;
pub mod theme;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::animation::AnimationLoop;
use crate::config::SplashConfig;
use crate::dom::{EventListener, ExclusionZone};
use crate::simulation::SplashSimulation;
use crate::theme::BodyTheme;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

type Simulation = Rc<RefCell<SplashSimulation<ThreadRng>>>;

// Splash effect bound to one <canvas>. Owns the simulation, the frame loop
// and the page listeners that feed it.
#[wasm_bindgen]
pub struct SplashCanvas {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    simulation: Simulation,
    exclusion_selector: Rc<RefCell<String>>,
    profiling: Rc<Cell<bool>>,
    animation: AnimationLoop,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl SplashCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<SplashCanvas, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", canvas_id)))?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let simulation = SplashSimulation::try_new(
            SplashConfig::default(),
            rand::thread_rng(),
            Box::new(BodyTheme::new(document.clone())),
        )
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(SplashCanvas {
            window,
            document,
            canvas,
            context,
            simulation: Rc::new(RefCell::new(simulation)),
            exclusion_selector: Rc::new(RefCell::new(ExclusionZone::DEFAULT_SELECTOR.to_owned())),
            profiling: Rc::new(Cell::new(false)),
            animation: AnimationLoop::new(),
            listeners: Vec::new(),
        })
    }

    // Sizes the canvas to the viewport, hooks up resize / mousemove / mousedown
    // and starts the frame loop
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.detach();

        fit_to_window(&self.window, &self.canvas, &self.simulation)?;

        let resize_listener = {
            let window = self.window.clone();
            let canvas = self.canvas.clone();
            let simulation = self.simulation.clone();
            EventListener::new(self.window.as_ref(), "resize", move |_: Event| {
                if let Err(err) = fit_to_window(&window, &canvas, &simulation) {
                    console::error_1(&err);
                }
            })?
        };

        let move_listener = {
            let document = self.document.clone();
            let selector = self.exclusion_selector.clone();
            let simulation = self.simulation.clone();
            EventListener::new(self.document.as_ref(), "mousemove", move |event: Event| {
                let (x, y) = match pointer_position(&event) {
                    Some(position) => position,
                    None => return,
                };
                // Without the card on the page there is nothing to spawn around
                match ExclusionZone::from_selector(&document, &selector.borrow()) {
                    Ok(Some(zone)) => {
                        simulation
                            .borrow_mut()
                            .on_ambient_move(x, y, zone.contains(x, y));
                    }
                    Ok(None) => {}
                    Err(err) => console::error_1(&err),
                }
            })?
        };

        let press_listener = {
            let simulation = self.simulation.clone();
            EventListener::new(self.document.as_ref(), "mousedown", move |event: Event| {
                if let Some((x, y)) = pointer_position(&event) {
                    simulation.borrow_mut().on_explicit_trigger(x, y);
                }
            })?
        };

        self.listeners = vec![resize_listener, move_listener, press_listener];

        let simulation = self.simulation.clone();
        let mut context = self.context.clone();
        let profiling = self.profiling.clone();
        let started = self.animation.start(&self.window, move || {
            let _timer = if profiling.get() {
                Some(Timer::new("SplashCanvas::frame"))
            } else {
                None
            };
            simulation.borrow_mut().run_frame(&mut context)
        });
        if let Err(err) = started {
            self.listeners.clear();
            return Err(err);
        }
        self.simulation.borrow_mut().start();

        console::log_1(&"splash canvas attached".into());
        Ok(())
    }

    pub fn detach(&mut self) {
        if !self.animation.is_running() && self.listeners.is_empty() {
            return;
        }
        self.animation.stop();
        self.listeners.clear();
        self.simulation.borrow_mut().stop();
        console::log_1(&"splash canvas detached".into());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.simulation
            .borrow_mut()
            .resize(width as f64, height as f64);
    }

    pub fn ambient_move(&mut self, x: f64, y: f64, over_exclusion_zone: bool) -> bool {
        self.simulation
            .borrow_mut()
            .on_ambient_move(x, y, over_exclusion_zone)
    }

    pub fn spawn_burst(&mut self, x: f64, y: f64) {
        self.simulation.borrow_mut().on_explicit_trigger(x, y);
    }

    // Single manual frame, for pages that run their own loop
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let _timer = if self.profiling.get() {
            Some(Timer::new("SplashCanvas::frame"))
        } else {
            None
        };
        self.simulation.borrow_mut().run_frame(&mut self.context)
    }

    pub fn particle_count(&self) -> usize {
        self.simulation.borrow().store().len()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn set_ambient_spawn_probability(&mut self, probability: f64) {
        self.simulation
            .borrow_mut()
            .set_ambient_spawn_probability(probability);
    }

    pub fn set_exclusion_selector(&mut self, selector: &str) {
        *self.exclusion_selector.borrow_mut() = selector.to_owned();
    }

    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling.set(enabled);
    }

    pub fn clear(&mut self) {
        self.simulation.borrow_mut().store_mut().clear();
    }
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement, simulation: &Simulation) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    simulation.borrow_mut().resize(width, height);
    Ok(())
}

fn pointer_position(event: &Event) -> Option<(f64, f64)> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| (mouse.client_x() as f64, mouse.client_y() as f64))
}
