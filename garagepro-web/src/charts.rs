//! Dashboard charts drawn with Chart.js, which the page loads separately.

use crate::errors::WebResult;
use garagepro_core::chart::{dashboard_charts, ChartSpec};
use garagepro_core::CurrencyFormat;
use js_sys::{Function, Reflect};
use serde::Serialize;
use tracing::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &Element, config: &JsValue) -> Result<ChartJs, JsValue>;
}

fn chart_js_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Build each dashboard chart whose canvas is on the page.
pub fn render_dashboard(document: &Document, currency: &CurrencyFormat) {
    let specs = dashboard_charts();
    if specs.iter().all(|s| document.get_element_by_id(s.anchor_id).is_none()) {
        return;
    }
    if !chart_js_loaded() {
        warn!("Chart.js is not loaded; dashboard charts skipped");
        return;
    }
    for spec in specs {
        let Some(canvas) = document.get_element_by_id(spec.anchor_id) else { continue };
        match render(&canvas, &spec, currency) {
            Ok(()) => debug!(chart = spec.anchor_id, "chart rendered"),
            Err(e) => error!(chart = spec.anchor_id, error = %e, "chart failed"),
        }
    }
}

fn render(canvas: &Element, spec: &ChartSpec, currency: &CurrencyFormat) -> WebResult<()> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = spec
        .config
        .serialize(&serializer)
        .map_err(|e| crate::errors::WebError::Decode(e.to_string()))?;
    if spec.currency_ticks {
        attach_currency_ticks(&config, currency.clone())?;
    }
    ChartJs::new(canvas, &config)?;
    Ok(())
}

/// Set `options.scales.y.ticks.callback` to render values as currency.
fn attach_currency_ticks(config: &JsValue, currency: CurrencyFormat) -> WebResult<()> {
    let mut node = config.clone();
    for key in ["options", "scales", "y", "ticks"] {
        node = Reflect::get(&node, &JsValue::from_str(key))?;
    }
    let callback = Closure::<dyn Fn(JsValue) -> String>::new(move |value: JsValue| {
        currency.format_whole(value.as_f64().unwrap_or(0.0))
    });
    let function: &Function = callback.as_ref().unchecked_ref();
    Reflect::set(&node, &JsValue::from_str("callback"), function)?;
    // The chart keeps calling it for the lifetime of the page.
    callback.forget();
    Ok(())
}
