//! Football Juggling entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use football_juggling::Settings;
    use football_juggling::notify::dispatch_events;
    use football_juggling::platform::web::{
        PostMessageNotifier, RafScheduler, canvas_by_id, context_2d, document, window,
    };
    use football_juggling::platform::{FrameLoop, PlatformError};
    use football_juggling::renderer::{CanvasRenderer, build_scene};
    use football_juggling::sim::{Autoplay, Bounds, GamePhase, GameState, kick, tick};
    use football_juggling::ui::{Overlay, overlay_for, rating, score_label};

    const CANVAS_ID: &str = "canvas";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        canvas: HtmlCanvasElement,
        renderer: CanvasRenderer,
        frames: FrameLoop<RafScheduler>,
        notifier: Option<PostMessageNotifier>,
        autoplay: Option<Autoplay>,
    }

    impl Game {
        /// One animation frame: simulate, then present
        fn frame(&mut self) {
            self.frames.frame_fired();

            if let Some(bot) = self.autoplay.as_mut() {
                if let Some(point) = bot.next_click(&self.state) {
                    kick(&mut self.state, point);
                }
            }
            tick(&mut self.state);

            self.refresh();
        }

        /// Push events out, redraw, and keep the frame loop in step with the phase
        fn refresh(&mut self) {
            match self.notifier.as_mut() {
                Some(notifier) => {
                    dispatch_events(&mut self.state, notifier);
                }
                None => {
                    self.state.drain_events();
                }
            }
            self.render();
            self.update_hud();
            self.frames.sync(self.state.phase);
        }

        fn render(&self) {
            let snap = self.state.snapshot();
            let shapes = build_scene(&snap, &self.settings);
            if let Err(e) = self
                .renderer
                .render(&shapes, snap.bounds_width, snap.bounds_height)
            {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Ok(document) = document() else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score-value") {
                el.set_text_content(Some(&score_label(self.state.score)));
            }

            let visible = overlay_for(self.state.phase);
            for overlay in Overlay::ALL {
                if let Some(el) = document.get_element_by_id(overlay.element_id()) {
                    let class = if visible == Some(overlay) {
                        "overlay"
                    } else {
                        "overlay hidden"
                    };
                    if let Err(e) = el.set_attribute("class", class) {
                        log::warn!("Could not update #{}: {:?}", overlay.element_id(), e);
                    }
                }
            }

            if self.state.phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&score_label(self.state.score)));
                }
                if let Some(el) = document.get_element_by_id("rating") {
                    el.set_text_content(Some(rating(self.state.score)));
                }
            }

            let cursor = if self.state.is_playing() { "pointer" } else { "default" };
            if let Err(e) = self.canvas.style().set_property("cursor", cursor) {
                log::warn!("Could not set canvas cursor: {:?}", e);
            }
        }

        /// Convert a click in CSS pixels to playfield coordinates and kick
        fn click(&mut self, client_x: f32, client_y: f32) {
            let rect = self.canvas.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let scale_x = self.state.bounds.width as f64 / rect.width();
            let scale_y = self.state.bounds.height as f64 / rect.height();
            let x = (client_x as f64 - rect.left()) * scale_x;
            let y = (client_y as f64 - rect.top()) * scale_y;

            if kick(&mut self.state, glam::Vec2::new(x as f32, y as f32)) {
                self.refresh();
            }
        }

        /// Match the canvas to its container and resize the playfield
        fn resize(&mut self) {
            let (width, height) = match self.canvas.parent_element() {
                Some(parent) if parent.client_width() > 0 && parent.client_height() > 0 => {
                    (parent.client_width(), parent.client_height())
                }
                _ => (self.canvas.client_width(), self.canvas.client_height()),
            };
            if width <= 0 || height <= 0 {
                return;
            }
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.state.resize(width as f32, height as f32);
            log::debug!("Playfield resized to {}x{}", width, height);
            self.render();
        }
    }

    pub fn run() -> Result<(), PlatformError> {
        log::info!("Football Juggling starting...");

        let window = window()?;
        let canvas = canvas_by_id(CANVAS_ID)?;
        let renderer = CanvasRenderer::new(context_2d(&canvas)?);

        let settings = Settings::load();
        let notifier = settings
            .notify_host
            .then(|| PostMessageNotifier::new(window.clone()));

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(Bounds::default(), settings.tuning),
            settings,
            canvas: canvas.clone(),
            renderer,
            frames: FrameLoop::new(RafScheduler::new(window.clone())),
            notifier,
            autoplay: None,
        }));

        {
            let weak = Rc::downgrade(&game);
            game.borrow()
                .frames
                .scheduler()
                .set_callback(move |_time: f64| {
                    if let Some(game) = weak.upgrade() {
                        game.borrow_mut().frame();
                    }
                });
        }

        setup_input_handlers(&canvas, Rc::downgrade(&game))?;
        setup_buttons(Rc::downgrade(&game))?;
        setup_window_handlers(&window, Rc::downgrade(&game))?;

        {
            let mut g = game.borrow_mut();
            g.resize();
            g.refresh();
        }

        // Listeners hold weak references; the game lives for the page's lifetime
        std::mem::forget(game);

        log::info!("Football Juggling running!");
        Ok(())
    }

    /// Run `f` against the game if it is still alive
    fn with_game(game: &Weak<RefCell<Game>>, f: impl FnOnce(&mut Game)) {
        if let Some(game) = game.upgrade() {
            f(&mut game.borrow_mut());
        }
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Weak<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            with_game(&game, |g| {
                g.click(event.client_x() as f32, event.client_y() as f32)
            });
        });
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(game: Weak<RefCell<Game>>) -> Result<(), PlatformError> {
        let document = document()?;

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                with_game(&game, |g| {
                    g.state.start();
                    g.refresh();
                });
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                with_game(&game, |g| {
                    g.state.restart();
                    g.refresh();
                });
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_window_handlers(
        window: &web_sys::Window,
        game: Weak<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        // Viewport resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                with_game(&game, |g| g.resize());
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Teardown: no frame may fire after the page goes away
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                with_game(&game, |g| g.frames.stop());
                log::info!("Page hidden, frame loop released");
            });
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Restored from the back/forward cache: pick the loop back up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                with_game(&game, |g| {
                    let phase = g.state.phase;
                    g.frames.sync(phase);
                    log::info!("Page shown, frame loop running: {}", g.frames.is_running());
                });
            });
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Idle/demo toggle
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() != "i" && event.key() != "I" {
                    return;
                }
                with_game(&game, |g| {
                    if g.autoplay.take().is_none() {
                        g.autoplay = Some(Autoplay::new(js_sys::Date::now() as u64, 0.97));
                        g.state.start_fresh();
                    }
                    log::info!("Idle mode: {}", g.autoplay.is_some());
                    g.refresh();
                });
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }

    if let Err(e) = wasm_game::run() {
        log::error!("Football Juggling could not start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use football_juggling::Settings;
    use football_juggling::notify::{LogNotifier, dispatch_events};
    use football_juggling::sim::{Autoplay, Bounds, GameState, kick, tick};
    use football_juggling::ui::{rating, score_label};

    /// Ten minutes of frames at 60 Hz
    const MAX_DEMO_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Football Juggling (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let settings = Settings::load();
    let mut state = GameState::new(Bounds::default(), settings.tuning);
    let mut bot = Autoplay::new(seed, 0.97);
    let mut notifier = LogNotifier;

    state.start();
    dispatch_events(&mut state, &mut notifier);

    while state.is_playing() && state.time_ticks < MAX_DEMO_TICKS {
        if let Some(point) = bot.next_click(&state) {
            kick(&mut state, point);
        }
        tick(&mut state);
        dispatch_events(&mut state, &mut notifier);
    }

    println!(
        "Demo (seed {}) finished after {} ticks: {} - {}",
        seed,
        state.time_ticks,
        score_label(state.score),
        rating(state.score)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
