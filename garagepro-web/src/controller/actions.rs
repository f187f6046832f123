use super::App;
use crate::dom;
use crate::errors::WebResult;
use garagepro_core::QuickAction;
use std::rc::Rc;
use tracing::{debug, error, info};

impl App {
    pub(super) fn init_quick_actions(self: &Rc<Self>) -> WebResult<()> {
        for button in dom::query_all(&self.document, "[data-quick-action]")? {
            let app = Rc::clone(self);
            let source = button.clone();
            dom::on(&button, "click", move |_| {
                let action = source.get_attribute("data-quick-action").unwrap_or_default();
                app.execute_quick_action(&action);
            })?;
        }
        Ok(())
    }

    pub fn execute_quick_action(&self, action: &str) {
        match QuickAction::resolve(action) {
            QuickAction::Navigate(path) => {
                let result = dom::window().and_then(|w| Ok(w.location().set_href(path)?));
                if let Err(e) = result {
                    error!(path, error = %e, "navigation failed");
                }
            }
            QuickAction::Unimplemented(name) => debug!(action = name, "quick action not available yet"),
            QuickAction::Unknown(name) => info!(action = %name, "unknown quick action"),
        }
    }
}
