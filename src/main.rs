#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use deck_viewer::{Cli, build_engine, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*; // <--- REQUIRED for .dyn_into()

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(fern::Output::call(|record| {
            web_sys::console::log_1(
                &format!("[{}] {}", record.level(), record.args()).into(),
            );
        }))
        .apply();

    log::info!("Deck viewer starting in WASM mode...");

    // B. No command line in the browser
    let engine = build_engine(&Cli::default()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    // C. Find the canvas element by ID
    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, engine))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use deck_viewer::{dump_deck, ui::config::UI_TEXT};
    use eframe::NativeOptions;
    use eframe::egui::ViewportBuilder;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the engine (validates the deck)
    let engine = build_engine(&args)?;

    if args.dump_deck {
        println!("{}", dump_deck(engine.deck())?);
        return Ok(());
    }

    log::info!(
        "Opening {} slides at #{}{}",
        engine.deck().len(),
        engine.current_index() + 1,
        if engine.is_presenter_active() { " (presenter mode)" } else { "" }
    );

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(UI_TEXT.window_title)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, engine))),
    )
    .map_err(|e| anyhow::anyhow!("Window event loop failed: {e}"))
}
