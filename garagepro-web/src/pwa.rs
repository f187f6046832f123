//! Progressive Web App plumbing: service worker registration, the deferred
//! install prompt and online/offline notices.

use crate::alerts::AlertCenter;
use crate::dom;
use crate::errors::{WebError, WebResult};
use garagepro_core::{Connectivity, InstallOutcome};
use js_sys::{Function, Promise, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, HtmlElement, ServiceWorkerRegistration};

/// Register the service worker at `path`. No retry on failure.
pub async fn register_service_worker(path: &str) -> WebResult<String> {
    let navigator = dom::window()?.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        return Err(WebError::MissingElement("navigator.serviceWorker"));
    }
    let registration = JsFuture::from(navigator.service_worker().register(path)).await?;
    let registration: ServiceWorkerRegistration = registration.dyn_into()?;
    Ok(registration.scope())
}

/// Holds the stashed `beforeinstallprompt` event for this page session.
pub struct PwaHandler {
    alerts: AlertCenter,
    alert_duration_ms: u32,
    install_button: Option<HtmlElement>,
    deferred_prompt: RefCell<Option<Event>>,
    button_wired: Cell<bool>,
}

impl PwaHandler {
    pub fn new(alerts: AlertCenter, alert_duration_ms: u32) -> WebResult<Rc<Self>> {
        let install_button = dom::by_id::<HtmlElement>(&dom::document()?, "install-button");
        Ok(Rc::new(Self {
            alerts,
            alert_duration_ms,
            install_button,
            deferred_prompt: RefCell::new(None),
            button_wired: Cell::new(false),
        }))
    }

    /// Register the worker and attach the window-level listeners.
    pub fn start(self: &Rc<Self>, service_worker_path: &str) -> WebResult<()> {
        let path = service_worker_path.to_string();
        spawn_local(async move {
            match register_service_worker(&path).await {
                Ok(scope) => info!(%scope, "service worker registered"),
                Err(e) => warn!(error = %e, "service worker registration failed"),
            }
        });

        let window = dom::window()?;
        let handler = Rc::clone(self);
        dom::on(&window, "beforeinstallprompt", move |event| handler.defer_prompt(event))?;

        let handler = Rc::clone(self);
        dom::on(&window, "online", move |_| handler.connectivity_changed(Connectivity::Online))?;
        let handler = Rc::clone(self);
        dom::on(&window, "offline", move |_| handler.connectivity_changed(Connectivity::Offline))?;
        Ok(())
    }

    /// Suppress the browser's own banner and offer our install button instead.
    fn defer_prompt(self: &Rc<Self>, event: Event) {
        event.prevent_default();
        *self.deferred_prompt.borrow_mut() = Some(event);
        let Some(button) = &self.install_button else { return };
        if let Err(e) = button.style().set_property("display", "block") {
            error!(error = ?e, "failed to show install button");
        }
        if self.button_wired.replace(true) {
            return;
        }
        let handler = Rc::clone(self);
        let wired = dom::on(button, "click", move |_| {
            let handler = Rc::clone(&handler);
            spawn_local(async move { handler.install().await });
        });
        if let Err(e) = wired {
            self.button_wired.set(false);
            error!(error = %e, "failed to wire install button");
        }
    }

    /// Replay the stashed prompt. The button is hidden whatever the user picks.
    pub async fn install(&self) {
        let Some(prompt) = self.deferred_prompt.take() else { return };
        match replay_prompt(&prompt).await {
            Ok(InstallOutcome::Accepted) => info!("user accepted the install prompt"),
            Ok(InstallOutcome::Dismissed) => info!("user dismissed the install prompt"),
            Ok(InstallOutcome::Other(outcome)) => info!(%outcome, "install prompt closed"),
            Err(e) => error!(error = %e, "install prompt failed"),
        }
        if let Some(button) = &self.install_button {
            if let Err(e) = button.style().set_property("display", "none") {
                error!(error = ?e, "failed to hide install button");
            }
        }
    }

    fn connectivity_changed(&self, state: Connectivity) {
        self.alerts.notify(state.alert(self.alert_duration_ms));
        if state == Connectivity::Online {
            sync_pending_operations();
        }
    }
}

/// `BeforeInstallPromptEvent` has no `web-sys` binding, so go through `Reflect`.
async fn replay_prompt(prompt: &Event) -> WebResult<InstallOutcome> {
    let prompt_fn = Reflect::get(prompt, &JsValue::from_str("prompt"))?;
    let prompt_fn: &Function = prompt_fn
        .dyn_ref()
        .ok_or(WebError::MissingElement("BeforeInstallPromptEvent.prompt"))?;
    prompt_fn.call0(prompt)?;
    let choice: Promise = Reflect::get(prompt, &JsValue::from_str("userChoice"))?.dyn_into()?;
    let choice = JsFuture::from(choice).await?;
    let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))?
        .as_string()
        .unwrap_or_default();
    Ok(InstallOutcome::parse(&outcome))
}

/// Hook for replaying work queued while offline; nothing is queued yet.
fn sync_pending_operations() {
    info!("syncing pending operations");
}
