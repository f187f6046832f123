use super::App;
use crate::dom;
use crate::errors::{WebError, WebResult};
use garagepro_core::print::print_document;
use std::rc::Rc;
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

impl App {
    pub(super) fn init_print_buttons(self: &Rc<Self>) -> WebResult<()> {
        for button in dom::query_all(&self.document, "[data-print]")? {
            let app = Rc::clone(self);
            let source = button.clone();
            dom::on(&button, "click", move |_| {
                let Some(target) = source.get_attribute("data-print") else { return };
                if let Err(e) = app.print_element(&target) {
                    error!(target = %target, error = %e, "print failed");
                }
            })?;
        }
        Ok(())
    }

    /// Copy the markup of `selector` into a blank window, print it after a
    /// short layout delay, then close the window.
    pub fn print_element(&self, selector: &str) -> WebResult<()> {
        let Some(element) = self.document.query_selector(selector)? else { return Ok(()) };
        let Some(print_window) = dom::window()?.open_with_url_and_target("", "_blank")? else {
            warn!("print window was blocked");
            return Ok(());
        };
        let doc: HtmlDocument = print_window
            .document()
            .ok_or(WebError::MissingElement("print document"))?
            .unchecked_into();
        doc.write_1(&print_document(&element.inner_html()))?;
        doc.close()?;
        print_window.focus()?;

        dom::set_timeout(self.config.print_delay_ms, move || {
            if let Err(e) = print_window.print() {
                error!(error = ?e, "print dialog failed");
            }
            if let Err(e) = print_window.close() {
                error!(error = ?e, "closing print window failed");
            }
        })?;
        Ok(())
    }
}
