//! Browser implementations of the platform traits

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::{FrameScheduler, PlatformError};
use crate::notify::{CompletionMessage, Notifier};

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

/// Look up a canvas element by id
pub fn canvas_by_id(id: &'static str) -> Result<HtmlCanvasElement, PlatformError> {
    document()?
        .get_element_by_id(id)
        .ok_or(PlatformError::MissingElement(id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PlatformError::NotACanvas(id))
}

/// The canvas's 2D drawing context
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, PlatformError> {
    canvas
        .get_context("2d")?
        .ok_or(PlatformError::NoContext2d)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PlatformError::NoContext2d)
}

/// requestAnimationFrame driven scheduler
///
/// The frame callback is installed once with [`RafScheduler::set_callback`]
/// and reused for every request.
pub struct RafScheduler {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_callback(&self, f: impl FnMut(f64) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::new(f));
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Posts completion messages to this window and its parent frame
pub struct PostMessageNotifier {
    window: Window,
}

impl PostMessageNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn post(target: &Window, message: &JsValue) {
        if let Err(e) = target.post_message(message, "*") {
            log::warn!("postMessage failed: {:?}", e);
        }
    }
}

impl Notifier for PostMessageNotifier {
    fn notify(&mut self, message: &CompletionMessage) {
        let value = match serde_json::to_string(message)
            .map_err(|e| e.to_string())
            .and_then(|json| js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e)))
        {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not encode completion message: {}", e);
                return;
            }
        };

        Self::post(&self.window, &value);
        match self.window.parent() {
            Ok(Some(parent)) => Self::post(&parent, &value),
            Ok(None) => {}
            Err(e) => log::warn!("No parent window: {:?}", e),
        }
        log::info!("Posted completion message (completed: {})", message.completed);
    }
}
