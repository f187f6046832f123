use super::App;
use crate::dom;
use crate::errors::{WebError, WebResult};
use garagepro_core::currency::{sum_amounts, unformat};
use garagepro_core::filter::{needs_filter, visibility, FILTER_CLASS, FILTER_PLACEHOLDER};
use std::rc::Rc;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, Node};

const CURRENCY_SELECTOR: &str = r#"input[type="number"][data-currency]"#;
const COST_SELECTOR: &str = r#"input[name="cost"]"#;
const ENHANCED_SELECTOR: &str = "select[data-enhanced]";

impl App {
    pub(super) fn init_forms(self: &Rc<Self>) -> WebResult<()> {
        for el in dom::query_all(&self.document, CURRENCY_SELECTOR)? {
            let Ok(input) = el.dyn_into::<HtmlInputElement>() else { continue };
            let app = Rc::clone(self);
            let source = input.clone();
            // A number input rejects "R 1,500.00", so the field is a text
            // input while it shows the formatted amount.
            dom::on(&input, "blur", move |_| {
                if let Some(formatted) = app.currency.format_input(&source.value()) {
                    source.set_type("text");
                    source.set_value(&formatted);
                }
            })?;
            let source = input.clone();
            dom::on(&input, "focus", move |_| {
                let raw = unformat(&source.value());
                source.set_type("number");
                source.set_value(&raw);
            })?;
        }

        for input in dom::query_all(&self.document, COST_SELECTOR)? {
            let app = Rc::clone(self);
            dom::on(&input, "input", move |_| app.recalculate_service_total())?;
        }

        for el in dom::query_all(&self.document, ENHANCED_SELECTOR)? {
            let Ok(select) = el.dyn_into::<HtmlSelectElement>() else { continue };
            if needs_filter(select.length(), self.config.enhanced_select_threshold) {
                if let Err(e) = enhance_select(&select) {
                    error!(error = %e, "failed to enhance select");
                }
            }
        }
        Ok(())
    }

    /// Sum every `cost` input on the page into `#service-total`.
    pub fn recalculate_service_total(&self) {
        let Some(total_el) = dom::by_id::<HtmlElement>(&self.document, "service-total") else { return };
        let values: Vec<String> = match dom::query_all(&self.document, COST_SELECTOR) {
            Ok(inputs) => inputs
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .collect(),
            Err(e) => {
                error!(error = %e, "failed to collect cost inputs");
                return;
            }
        };
        let total = sum_amounts(values.iter().map(String::as_str));
        total_el.set_text_content(Some(&self.currency.format(total)));
    }
}

/// Insert a text filter above `select`. Typing hides non-matching options;
/// nothing is removed, so the selected value is untouched.
pub fn enhance_select(select: &HtmlSelectElement) -> WebResult<HtmlInputElement> {
    let document = dom::document()?;
    let parent = select.parent_node().ok_or(WebError::MissingElement("select parent"))?;
    let filter: HtmlInputElement = document.create_element("input")?.unchecked_into();
    filter.set_type("text");
    filter.set_placeholder(FILTER_PLACEHOLDER);
    filter.set_class_name(FILTER_CLASS);
    filter.style().set_property("margin-bottom", "0.5rem")?;
    let anchor: &Node = select;
    parent.insert_before(&filter, Some(anchor))?;

    let target = select.clone();
    let source = filter.clone();
    dom::on(&filter, "input", move |_| {
        if let Err(e) = filter_options(&target, &source.value()) {
            error!(error = %e, "failed to filter options");
        }
    })?;
    debug!(options = select.length(), "select enhanced");
    Ok(filter)
}

/// Show options whose label contains `filter` (case-insensitive), hide the rest.
pub fn filter_options(select: &HtmlSelectElement, filter: &str) -> WebResult<()> {
    let options: Vec<HtmlOptionElement> = (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .collect();
    let labels: Vec<String> = options.iter().map(HtmlOptionElement::text).collect();
    let shown = visibility(labels.iter().map(String::as_str), filter);
    for (option, visible) in options.iter().zip(shown) {
        option.style().set_property("display", if visible { "" } else { "none" })?;
    }
    Ok(())
}
