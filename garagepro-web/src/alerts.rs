//! Toast surface. Only one toast is on screen at a time: showing a new one
//! removes every existing `.flash-alert` first.

use crate::dom;
use crate::errors::{WebError, WebResult};
use garagepro_core::alert::{ALERT_CLASS, CLOSE_BUTTON_STYLE, CONTAINER_CLASS, CONTAINER_STYLE};
use garagepro_core::Alert;
use tracing::error;
use web_sys::{Document, Element};

#[derive(Debug, Clone)]
pub struct AlertCenter {
    document: Document,
}

impl AlertCenter {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Show `alert`, logging instead of failing if the DOM refuses.
    pub fn notify(&self, alert: Alert) {
        if let Err(e) = self.show(&alert) {
            error!(error = %e, message = %alert.message, "failed to show alert");
        }
    }

    pub fn show(&self, alert: &Alert) -> WebResult<Element> {
        self.clear()?;

        let node = self.document.create_element("div")?;
        node.set_class_name(&alert.class_name());

        let row = self.document.create_element("div")?;
        row.set_class_name("d-flex justify-between align-center");
        let text = self.document.create_element("span")?;
        text.set_text_content(Some(&alert.message));
        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_attribute("style", CLOSE_BUTTON_STYLE)?;
        close.set_text_content(Some("×"));
        row.append_child(&text)?;
        row.append_child(&close)?;
        node.append_child(&row)?;

        let target = node.clone();
        dom::on(&close, "click", move |_| target.remove())?;

        self.container()?.append_child(&node)?;

        if let Some(ms) = alert.auto_dismiss_ms() {
            let target = node.clone();
            dom::set_timeout(ms, move || {
                if target.parent_element().is_some() {
                    target.remove();
                }
            })?;
        }
        Ok(node)
    }

    /// Remove every toast currently on the page.
    pub fn clear(&self) -> WebResult<()> {
        for existing in dom::query_all(&self.document, &format!(".{ALERT_CLASS}"))? {
            existing.remove();
        }
        Ok(())
    }

    fn container(&self) -> WebResult<Element> {
        if let Some(found) = self.document.query_selector(&format!(".{CONTAINER_CLASS}"))? {
            return Ok(found);
        }
        let container = self.document.create_element("div")?;
        container.set_class_name(CONTAINER_CLASS);
        container.set_attribute("style", CONTAINER_STYLE)?;
        let body = self.document.body().ok_or(WebError::MissingElement("body"))?;
        body.append_child(&container)?;
        Ok(container)
    }
}
