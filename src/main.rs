//! Lane Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Idle/demo mode clicks an object once its bottom edge passes this
/// fraction of the play-area height
const AUTOPLAY_REACTION_DEPTH: f32 = 0.6;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use lane_drop::platform::class_list;
    use lane_drop::renderer::CanvasRenderer;
    use lane_drop::{GameController, GameEvent, GamePhase, Presenter};

    use super::AUTOPLAY_REACTION_DEPTH;

    /// Game instance holding all state
    struct Game {
        controller: GameController,
        renderer: Option<CanvasRenderer>,
        /// Idle/demo mode - AI plays the game
        idle_mode: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                controller: GameController::new(seed),
                renderer: None,
                idle_mode: false,
            }
        }

        /// Run one frame of simulation
        fn update(&mut self, time: f64) {
            self.controller.frame(time);

            if self.idle_mode && self.controller.phase() == GamePhase::Running {
                let area = self.controller.state().area;
                let half_height = self.controller.state().tuning.object_height / 2.0;
                if let Some(target) = self.controller.autoplay_target() {
                    if target.y + half_height >= area.height * AUTOPLAY_REACTION_DEPTH {
                        self.controller.handle_input(target);
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut renderer) = self.renderer {
                renderer.present(&self.controller.view());
            }
        }

        /// Apply queued events to the DOM
        fn update_hud(&mut self, document: &Document) {
            for event in self.controller.drain_events() {
                match event {
                    GameEvent::Caught { score, .. } => {
                        set_text(document, "score", &score.to_string());
                    }
                    GameEvent::StageUp { stage } => {
                        set_text(document, "stage", &stage.to_string());
                    }
                    GameEvent::StarEarned { stars } => {
                        update_stars(document, stars, self.controller.view().max_stars);
                    }
                    GameEvent::EndlessEntered => {
                        set_class(document, "gameArea", &class_list("", "endless", true));
                    }
                    GameEvent::SessionEnded(summary) => {
                        set_text(document, "finalScore", &summary.score.to_string());
                        set_text(document, "finalStage", &summary.stage.to_string());
                        set_class(document, "gameOverScreen", &class_list("", "hidden", false));
                    }
                    GameEvent::Spawned { .. } => {}
                }
            }
        }

        /// Refresh every HUD element from state (after reset)
        fn sync_hud(&self, document: &Document) {
            let view = self.controller.view();
            set_text(document, "score", &view.score.to_string());
            set_text(document, "stage", &view.stage.to_string());
            update_stars(document, view.stars, view.max_stars);
            set_class(document, "gameArea", &class_list("", "endless", view.endless));
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Create one `span.star` per star slot inside `#stars`
    fn build_stars(document: &Document, max_stars: u8) {
        let Some(container) = document.get_element_by_id("stars") else {
            log::warn!("No #stars element");
            return;
        };
        let markup: String = (1..=max_stars)
            .map(|i| format!(r#"<span id="star{}" class="star">★</span>"#, i))
            .collect();
        container.set_inner_html(&markup);
    }

    fn update_stars(document: &Document, stars: u8, max_stars: u8) {
        for i in 1..=max_stars {
            set_class(document, &format!("star{}", i), &class_list("star", "earned", i <= stars));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger init failed: {}", e)));
        }

        log::info!("Lane Drop starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameArea")
            .ok_or_else(|| JsValue::from_str("no #gameArea canvas"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        {
            let mut g = game.borrow_mut();
            match CanvasRenderer::new(canvas.clone(), window.device_pixel_ratio()) {
                Ok(renderer) => {
                    let (w, h) = renderer.client_size();
                    g.controller.set_play_area(w, h);
                    g.renderer = Some(renderer);
                }
                Err(e) => log::error!("Canvas setup failed: {:?}", e),
            }
            build_stars(&document, g.controller.view().max_stars);
            g.sync_hud(&document);
        }

        setup_input_handlers(&canvas, game.clone());
        setup_session_buttons(&document, game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Lane Drop running!");
        Ok(())
    }

    /// Convert a client-space point to play-area coordinates
    fn to_play_area(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (client_x - rect.left()) as f32,
            (client_y - rect.top()) as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = to_play_area(
                    &canvas_clone,
                    event.client_x() as f64,
                    event.client_y() as f64,
                );
                game.borrow_mut().controller.handle_input(pos);
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (prevent the synthetic click)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = to_play_area(
                        &canvas_clone,
                        touch.client_x() as f64,
                        touch.client_y() as f64,
                    );
                    game.borrow_mut().controller.handle_input(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_session_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().controller.start();
                set_class(&document, "startScreen", &class_list("overlay", "hidden", true));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #startBtn element");
        }

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.controller.reset();
                g.controller.drain_events();
                g.sync_hud(&document);
                set_class(&document, "gameOverScreen", &class_list("", "hidden", true));
                set_class(&document, "startScreen", &class_list("overlay", "hidden", false));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #restartBtn element");
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            let size = g.renderer.as_mut().map(|r| {
                let (w, h) = r.client_size();
                r.resize(w, h);
                (w, h)
            });
            if let Some((w, h)) = size {
                g.controller.set_play_area(w, h);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud(&document);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the idle AI plays one session at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_drop::renderer::AsciiRenderer;
    use lane_drop::{GameController, GameEvent, Presenter, Tuning};

    env_logger::init();
    log::info!("Lane Drop (native) starting...");

    let tuning = match std::env::var("LANE_DROP_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
            log::error!("{}; using default tuning", e);
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let seed: u64 = rand::random();
    log::info!("Game initialized with seed: {}", seed);

    let mut game = GameController::with_tuning(seed, tuning);
    let mut renderer = AsciiRenderer::default();
    game.start();

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 180;
    let mut now = 0.0;
    for frame in 0..MAX_FRAMES {
        now += FRAME_MS;
        game.frame(now);

        let area = game.state().area;
        let half_height = game.state().tuning.object_height / 2.0;
        if let Some(target) = game.autoplay_target() {
            if target.y + half_height >= area.height * AUTOPLAY_REACTION_DEPTH {
                game.handle_input(target);
            }
        }

        for event in game.drain_events() {
            match event {
                GameEvent::StageUp { stage } => log::info!("Stage {}", stage),
                GameEvent::StarEarned { stars } => log::info!("Stars: {}", stars),
                _ => {}
            }
        }

        if frame % 60 == 0 {
            renderer.present(&game.view());
        }
        if !game.state().is_running() {
            break;
        }
    }

    let summary = game.end_session();
    renderer.present(&game.view());
    println!("{}", renderer.last_frame());
    println!(
        "Final score {} at stage {} ({} stars{})",
        summary.score,
        summary.stage,
        summary.stars,
        if summary.endless { ", endless" } else { "" }
    );
}
