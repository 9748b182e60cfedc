//! Score Fireworks entry point
//!
//! On the web: attaches to the `#canvas` element, listens for score messages
//! from the host page and runs the animation frame loop. Natively: a
//! headless run that prints what the widget would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MessageEvent};

    use score_fireworks::Settings;
    use score_fireworks::platform::{FrameController, FrameSwitch, handle_message};
    use score_fireworks::renderer::CanvasSurface;
    use score_fireworks::sim::{WidgetState, tick};

    /// Widget instance holding all state
    struct Widget {
        state: WidgetState,
        surface: CanvasSurface,
        frame: FrameSwitch,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Score Fireworks starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

        let settings = Settings::load(&canvas);

        // Canvas covers a fraction of the window
        let width = (window.inner_width()?.as_f64().unwrap_or(0.0) * settings.canvas_scale) as u32;
        let height = (window.inner_height()?.as_f64().unwrap_or(0.0) * settings.canvas_scale) as u32;

        let mut surface = CanvasSurface::new(canvas)?;
        surface.resize(width, height);

        let seed = js_sys::Date::now() as u64;
        let widget = Rc::new(RefCell::new(Widget {
            state: WidgetState::new(seed, settings),
            surface,
            frame: FrameSwitch::new(),
        }));

        log::info!("Widget initialized ({}x{}, seed {})", width, height, seed);

        setup_message_listener(&window, widget.clone())?;

        // Draw at least one frame; the idle tier pauses the loop until a score arrives
        let wake = {
            let mut w = widget.borrow_mut();
            w.frame.start();
            w.frame.take_wake()
        };
        if wake {
            request_animation_frame(widget);
        }

        log::info!("Score Fireworks running!");
        Ok(())
    }

    fn setup_message_listener(
        window: &web_sys::Window,
        widget: Rc<RefCell<Widget>>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MessageEvent| {
            let json = match js_sys::JSON::stringify(&event.data()) {
                Ok(text) => text.as_string(),
                Err(_) => None,
            };
            let Some(json) = json else {
                log::debug!("ignoring message without JSON payload");
                return;
            };

            let wake = {
                let mut w = widget.borrow_mut();
                let Widget { state, frame, .. } = &mut *w;
                handle_message(&json, state, frame) && frame.take_wake()
            };
            if wake {
                request_animation_frame(widget.clone());
            }
        });
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(widget: Rc<RefCell<Widget>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Freed by the JS side once it has run
        let callback = Closure::once_into_js(move |_time: f64| {
            frame_loop(widget);
        });
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn frame_loop(widget: Rc<RefCell<Widget>>) {
        let running = {
            let mut w = widget.borrow_mut();
            let Widget {
                state,
                surface,
                frame,
            } = &mut *w;
            tick(state, surface, frame);
            frame.is_running()
        };

        if running {
            request_animation_frame(widget);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_widget::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use score_fireworks::Settings;
    use score_fireworks::platform::{FrameController, FrameSwitch, handle_message};
    use score_fireworks::renderer::CommandBuffer;
    use score_fireworks::sim::{WidgetState, tick};

    env_logger::init();
    log::info!("Score Fireworks (native) starting...");
    log::info!("Native mode renders headless - build for wasm32 to see the canvas");

    // Optional: score, max score and locale tag as arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let number = |i: usize, default: f64| {
        args.get(i)
            .and_then(|a| a.parse::<f64>().ok())
            .unwrap_or(default)
    };
    let score = number(0, 95.0);
    let max_score = number(1, 100.0);

    let mut state = WidgetState::new(0x5eed, Settings::load(args.get(2).map(String::as_str)));
    let mut surface = CommandBuffer::new(960.0, 540.0);
    let mut frame = FrameSwitch::new();

    frame.start();
    tick(&mut state, &mut surface, &mut frame);
    println!("idle frame: {:?}", surface.texts());

    let message = serde_json::json!({
        "type": score_fireworks::consts::SCORE_MESSAGE_TYPE,
        "score": score,
        "maxScore": max_score,
    });
    handle_message(&message.to_string(), &mut state, &mut frame);

    let mut frames = 0;
    while frame.is_running() && frames < 300 {
        surface.clear();
        let tier = tick(&mut state, &mut surface, &mut frame);
        frames += 1;
        if frames % 60 == 0 {
            println!(
                "frame {:>3}: tier={} fireworks={} particles={}",
                frames,
                tier.as_str(),
                state.fireworks.len(),
                state.fireworks.particle_count()
            );
        }
    }

    println!("last frame: {:?}", surface.texts());
    match serde_json::to_string(&surface.commands().first()) {
        Ok(json) => println!("first command: {}", json),
        Err(e) => log::warn!("could not encode commands: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
