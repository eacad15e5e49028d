//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use canvas_pong::renderer::render;
    use canvas_pong::{Config, Session, TickDriver};

    /// Game instance holding all state
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Tick once, then draw
        fn frame(&mut self) {
            let state = self.session.advance();
            render(state, &mut self.ctx);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Canvas Pong starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("pong")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No <canvas id=\"pong\"> found");
                return;
            }
        };

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("2D canvas context unavailable");
                return;
            }
        };

        // Field size follows the canvas
        let config = Config::with_field(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = config.validate() {
            log::error!("Canvas too small to play: {}", e);
            return;
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(config, seed),
            ctx,
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);
        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let pointer_y = event.client_y() as f64 - rect.top();
            game.borrow_mut().session.set_pointer_y(pointer_y as f32);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ticks simulated by the headless demo (one minute at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::renderer::{DrawList, render};
    use canvas_pong::{Config, Session, TickDriver};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the playable version");

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| Config::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Failed to load config {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => Config::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::new(config, seed);

    // Scripted pointer sweeping the field
    let mid = config.field_height / 2.0;
    for i in 0..DEMO_TICKS {
        let pointer_y = mid + mid * (i as f32 * 0.02).sin();
        session.set_pointer_y(pointer_y);
        session.advance();
    }

    let state = session.state();
    let mut frame = DrawList::default();
    render(state, &mut frame);

    println!(
        "After {} ticks: player {} - {} AI (ball speed {:.1}, {} draw calls)",
        state.time_ticks,
        state.player_score,
        state.ai_score,
        state.ball.speed(),
        frame.len()
    );
}
