//! Wolf Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use wolf_runner::consts::*;
    use wolf_runner::persistence::LocalStorageStore;
    use wolf_runner::platform::{self, input};
    use wolf_runner::renderer::{CanvasPainter, build_scene};
    use wolf_runner::sim::GameEvent;
    use wolf_runner::ui::{Hud, Overlay};
    use wolf_runner::{Game, Tuning};

    /// Browser-side state around the game
    struct App {
        game: Game<LocalStorageStore>,
        painter: CanvasPainter,
        canvas: HtmlCanvasElement,
        document: Document,
        last_time: f64,
        /// Last HUD written to the DOM
        hud: Option<Hud>,
    }

    impl App {
        /// Fit the canvas to its container and rescale the logical view
        fn resize(&mut self) {
            let (w, h) = match self.document.query_selector(".game-container").ok().flatten() {
                Some(container) => {
                    let el: &web_sys::HtmlElement = container.unchecked_ref();
                    (el.offset_width(), el.offset_height())
                }
                None => (self.canvas.client_width(), self.canvas.client_height()),
            };
            let (w, h) = (w.max(0) as u32, h.max(0) as u32);
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            self.painter.resize(h);

            if self.painter.scale() > 0.0 {
                let view_width = (f64::from(w) / self.painter.scale()) as f32;
                self.game.set_view_width(view_width);
                log::debug!("Resized to {}x{} (view width {:.0})", w, h, view_width);
            }
        }

        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            for event in self.game.update(dt) {
                log_event(&event);
            }

            let shapes = build_scene(&self.game.state);
            if let Err(err) = self.painter.paint(&shapes, self.game.state.view_width) {
                log::warn!("Render error: {:?}", err);
            }
            self.update_hud();
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = self.game.hud();
            if self.hud.as_ref() == Some(&hud) {
                return;
            }

            set_text(&self.document, "current-score", &hud.score);
            set_text(&self.document, "high-score", &hud.high_score);
            set_active(
                &self.document,
                "start-screen",
                hud.overlay == Overlay::StartScreen,
            );
            match hud.overlay {
                Overlay::GameOver { final_score } => {
                    set_text(&self.document, "final-score", &final_score.to_string());
                    set_active(&self.document, "game-over-screen", true);
                }
                Overlay::StartScreen | Overlay::None => {
                    set_active(&self.document, "game-over-screen", false);
                }
            }

            self.hud = Some(hud);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_active(document: &Document, id: &str, active: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if active {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::GameOver {
                final_score,
                new_record: true,
                ..
            } => log::info!("New record saved: {:.0}", final_score),
            other => log::debug!("{:?}", other),
        }
    }

    /// Balance overrides from `<script id="tuning" type="application/json">`
    fn page_tuning(document: &Document) -> Tuning {
        let Some(text) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        Tuning::from_json(&text).unwrap_or_else(|err| {
            log::warn!("Ignoring page tuning: {}", err);
            Tuning::default()
        })
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        log::info!("Wolf Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(LocalStorageStore, seed, page_tuning(&document));
        let painter = CanvasPainter::new(ctx, canvas.height());

        let app = Rc::new(RefCell::new(App {
            game,
            painter,
            canvas,
            document,
            last_time: 0.0,
            hud: None,
        }));

        {
            let mut a = app.borrow_mut();
            a.resize();
            for event in a.game.drain_events() {
                log_event(&event);
            }
        }

        setup_input_handlers(&window, app.clone());
        setup_resize(&window, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Wolf Runner running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = platform::key_down(&event.code(), &event.key()) {
                    // Keep Space/arrows from scrolling the page
                    event.prevent_default();
                    action.apply(&mut app.borrow_mut().game);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = platform::key_up(&event.code(), &event.key()) {
                    action.apply(&mut app.borrow_mut().game);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (primary action)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                input::touch_start().apply(&mut app.borrow_mut().game);
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        web_sys::console::error_1(&err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use wolf_runner::persistence::FileStore;
    use wolf_runner::sim::GameEvent;
    use wolf_runner::{Game, Tuning};

    const HIGH_SCORE_FILE: &str = "wolf-runner-highscore.txt";
    const DEMO_RUNS: u32 = 3;
    /// Per-run cap for an autopilot that never crashes (about 30 minutes of play)
    const MAX_TICKS_PER_RUN: u64 = 60 * 60 * 30;

    fn load_tuning(path: &Path) -> Tuning {
        let parsed = std::fs::read_to_string(path)
            .map_err(|err| err.to_string())
            .and_then(|text| Tuning::from_json(&text).map_err(|err| err.to_string()));
        match parsed {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Using default tuning ({}: {})", path.display(), err);
                Tuning::default()
            }
        }
    }

    /// Headless autopilot session persisting its record to a local file
    pub fn run() {
        let tuning = std::env::args()
            .nth(1)
            .map(|path| load_tuning(Path::new(&path)))
            .unwrap_or_default();

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut game = Game::new(FileStore::new(HIGH_SCORE_FILE), seed, tuning);
        game.set_autopilot(true);

        for run in 1..=DEMO_RUNS {
            let mut ticks = 0u64;
            let outcome = loop {
                let over = game.step().into_iter().find_map(|event| match event {
                    GameEvent::GameOver {
                        final_score,
                        new_record,
                        ..
                    } => Some((final_score, new_record)),
                    _ => None,
                });
                if over.is_some() || ticks >= MAX_TICKS_PER_RUN {
                    break over;
                }
                ticks += 1;
            };

            match outcome {
                Some((score, new_record)) => println!(
                    "Run {}: {:.0} points{}",
                    run,
                    score,
                    if new_record { " (new record)" } else { "" }
                ),
                None => println!("Run {}: still running after {} ticks", run, ticks),
            }
        }

        println!("{}", game.hud().high_score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Wolf Runner (native) starting...");
    log::info!("The playable build targets wasm; running a headless autopilot demo");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
