pub mod api;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod model;
pub mod view;

use controller::Controller;
use view::View;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::Config;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let window = window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let body = document.body().ok_or("body to exist")?;

    let config = Config::from_body(&body);
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("grit web starting, api base {:?}", config.api_base);

    let controller = Controller::new(&window, &document, config);
    controller
        .bind()
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    // Show an overview of courses at startup
    controller.show(View::CourseList);

    Ok(())
}
