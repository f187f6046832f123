//! WASM page script for GaragePro.
//!
//! On load the script reads its configuration, wires the page controller,
//! draws any dashboard charts and starts the PWA handler. Each part only
//! touches the elements it finds; a page without a given widget is left alone.
//!
//! JS globals kept for inline template code: `showAlert`, `formatCurrency`,
//! `formatDate`.
use garagepro_core::{Alert, ClientConfig};
use std::rc::Rc;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod alerts;
mod api;
mod charts;
mod controller;
mod dom;
mod errors;
mod logging;
mod pwa;

pub use alerts::AlertCenter;
pub use api::{GarageApi, HttpApi};
pub use controller::{enhance_select, filter_options, App};
pub use errors::{WebError, WebResult};
pub use pwa::PwaHandler;

/// Element holding optional JSON configuration for the script.
const CONFIG_ELEMENT_ID: &str = "garagepro-config";

/// Read `#garagepro-config`, falling back to defaults when it is absent or bad.
pub fn load_config(document: &Document) -> ClientConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ClientConfig::default();
    };
    ClientConfig::from_json_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "invalid page configuration, using defaults");
        ClientConfig::default()
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let config = load_config(&document);
    logging::init(&config.log_level);

    if document.ready_state() == "loading" {
        let ready = document.clone();
        dom::on(&document, "DOMContentLoaded", move |_| boot(&ready, config.clone()))?;
    } else {
        boot(&document, config);
    }
    Ok(())
}

fn boot(document: &Document, config: ClientConfig) {
    let api: Rc<dyn GarageApi> = Rc::new(HttpApi::default());
    match App::new(config.clone(), api) {
        Ok(app) => app.wire(),
        Err(e) => error!(error = %e, "page controller failed to start"),
    }

    charts::render_dashboard(document, &config.currency());

    let started = PwaHandler::new(AlertCenter::new(document.clone()), config.alert_duration_ms)
        .and_then(|pwa| pwa.start(&config.service_worker_path));
    if let Err(e) = started {
        error!(error = %e, "PWA handler failed to start");
    }
    info!("GaragePro page script ready");
}

/// `showAlert(message, kind = "info", durationMs)`. The duration defaults to
/// the page configuration; an unknown kind is shown as info.
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(message: String, kind: Option<String>, duration_ms: Option<u32>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let config = load_config(&document);
    let alert = Alert::from_page(message, kind.as_deref(), duration_ms, config.alert_duration_ms);
    AlertCenter::new(document).show(&alert)?;
    Ok(())
}

/// `formatCurrency(amount)` using the page configuration's currency settings.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> Result<String, JsValue> {
    let config = load_config(&dom::document()?);
    Ok(config.currency().format(amount))
}

/// `formatDate(value)`: ISO date to `15 Jan 2024`.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: String) -> String {
    garagepro_core::dates::format_date(&value)
}
