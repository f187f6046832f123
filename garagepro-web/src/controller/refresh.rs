use super::App;
use crate::dom;
use crate::errors::WebResult;
use garagepro_core::sequence::DASHBOARD_OP;
use std::rc::Rc;
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;

impl App {
    pub(super) fn init_auto_refresh(self: &Rc<Self>) -> WebResult<()> {
        if dom::query_all(&self.document, "[data-auto-refresh]")?.is_empty() {
            return Ok(());
        }
        let app = Rc::clone(self);
        dom::set_interval(self.config.refresh_interval_ms, move || {
            let app = Rc::clone(&app);
            spawn_local(async move { app.refresh_dashboard().await });
        })?;
        debug!(period_ms = self.config.refresh_interval_ms, "dashboard auto refresh enabled");
        Ok(())
    }

    /// Fetch dashboard stats and patch the stat elements. Failures are only
    /// logged: a background poll must not raise a toast every period.
    pub async fn refresh_dashboard(&self) {
        let ticket = self.sequencer.borrow_mut().issue(DASHBOARD_OP);
        let outcome = self.api.dashboard_stats().await;
        if !self.sequencer.borrow().is_current(&ticket) {
            return;
        }
        match outcome {
            Ok(stats) => {
                for (id, text) in stats.entries(&self.currency) {
                    if let Some(el) = self.document.get_element_by_id(id) {
                        el.set_text_content(Some(&text));
                    }
                }
            }
            Err(e) => error!(error = %e, "failed to refresh dashboard data"),
        }
    }
}
