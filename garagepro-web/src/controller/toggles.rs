use super::App;
use crate::dom;
use crate::errors::WebResult;
use garagepro_core::sequence::toggle_op;
use garagepro_core::toggle::{TOGGLE_FAILURE_MESSAGE, TOGGLE_SUCCESS_MESSAGE};
use garagepro_core::{Alert, ServiceToggleRequest};
use std::rc::Rc;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

const TOGGLE_SELECTOR: &str = r#".service-toggle input[type="checkbox"][data-service-id]"#;

impl App {
    pub(super) fn init_service_toggles(self: &Rc<Self>) -> WebResult<()> {
        for el in dom::query_all(&self.document, TOGGLE_SELECTOR)? {
            let Ok(input) = el.dyn_into::<HtmlInputElement>() else { continue };
            let app = Rc::clone(self);
            let source = input.clone();
            dom::on(&input, "change", move |_| {
                let Some(service_id) = source.get_attribute("data-service-id") else { return };
                let request = ServiceToggleRequest::new(service_id, source.checked());
                let app = Rc::clone(&app);
                spawn_local(async move { app.toggle_service(request).await });
            })?;
        }
        Ok(())
    }

    /// Send a checkbox change. On success the service row is restyled; on
    /// any failure the checkbox goes back to where it was and an error toast
    /// is shown. A reply overtaken by a newer toggle of the same service
    /// neither alerts nor touches the checkbox; if it succeeded, the row
    /// classes still follow it since the server did apply that change.
    pub async fn toggle_service(&self, request: ServiceToggleRequest) {
        let op = toggle_op(&request.service_id);
        let ticket = self.sequencer.borrow_mut().issue(&op);
        let outcome = self.api.toggle_service(&request).await;
        if !self.sequencer.borrow().is_current(&ticket) {
            debug!(service = %request.service_id, applied = outcome.is_ok(), "stale toggle reply");
            if outcome.is_ok() {
                if let Err(e) = self.update_service_ui(&request) {
                    error!(error = %e, "failed to restyle service row");
                }
            }
            return;
        }
        match outcome {
            Ok(()) => {
                self.alerts.notify(Alert::success(TOGGLE_SUCCESS_MESSAGE).with_duration(self.config.alert_duration_ms));
                if let Err(e) = self.update_service_ui(&request) {
                    error!(error = %e, "failed to restyle service row");
                }
            }
            Err(e) => {
                error!(service = %request.service_id, error = %e, "error updating service status");
                self.alerts.notify(Alert::error(TOGGLE_FAILURE_MESSAGE).with_duration(self.config.alert_duration_ms));
                if let Err(e) = self.revert_toggle(&request) {
                    error!(error = %e, "failed to revert toggle");
                }
            }
        }
    }

    fn revert_toggle(&self, request: &ServiceToggleRequest) -> WebResult<()> {
        for el in dom::query_all(&self.document, TOGGLE_SELECTOR)? {
            if el.get_attribute("data-service-id").as_deref() != Some(request.service_id.as_str()) {
                continue;
            }
            if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
                input.set_checked(!request.is_fixed);
            }
        }
        Ok(())
    }

    fn update_service_ui(&self, request: &ServiceToggleRequest) -> WebResult<()> {
        let (add, remove) = request.state_classes();
        for el in dom::query_all(&self.document, "[data-service]")? {
            if el.get_attribute("data-service").as_deref() == Some(request.service_id.as_str()) {
                el.class_list().add_1(add)?;
                el.class_list().remove_1(remove)?;
            }
        }
        self.recalculate_service_total();
        Ok(())
    }
}
