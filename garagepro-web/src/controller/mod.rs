//! Page controller: binds every interactive surface once at load.
//!
//! One [`App`] exists per page session. It owns the API handle, the toast
//! surface, the search debouncer and the request sequencer; listeners hold
//! an `Rc<App>` and nothing lives in free-standing globals.

mod actions;
mod forms;
mod print;
mod refresh;
mod search;
mod toggles;

use crate::alerts::AlertCenter;
use crate::api::GarageApi;
use crate::dom::{self, Debouncer};
use crate::errors::WebResult;
use garagepro_core::{ClientConfig, CurrencyFormat, RequestSequencer};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::Document;

pub use forms::{enhance_select, filter_options};

pub struct App {
    config: ClientConfig,
    currency: CurrencyFormat,
    api: Rc<dyn GarageApi>,
    alerts: AlertCenter,
    sequencer: RefCell<RequestSequencer>,
    search_debounce: Debouncer,
    document: Document,
}

impl App {
    pub fn new(config: ClientConfig, api: Rc<dyn GarageApi>) -> WebResult<Rc<Self>> {
        let document = dom::document()?;
        Ok(Rc::new(Self {
            currency: config.currency(),
            search_debounce: Debouncer::new(config.search_debounce_ms),
            alerts: AlertCenter::new(document.clone()),
            sequencer: RefCell::new(RequestSequencer::new()),
            api,
            config,
            document,
        }))
    }

    pub fn alerts(&self) -> &AlertCenter {
        &self.alerts
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Attach all listeners. A surface that fails to bind is logged and
    /// skipped so the rest of the page still works.
    pub fn wire(self: &Rc<Self>) {
        let steps: [(&str, fn(&Rc<Self>) -> WebResult<()>); 6] = [
            ("service toggles", Self::init_service_toggles),
            ("quick actions", Self::init_quick_actions),
            ("search", Self::init_search),
            ("forms", Self::init_forms),
            ("print buttons", Self::init_print_buttons),
            ("auto refresh", Self::init_auto_refresh),
        ];
        for (name, step) in steps {
            match step(self) {
                Ok(()) => debug!(surface = name, "wired"),
                Err(e) => warn!(surface = name, error = %e, "failed to wire"),
            }
        }
    }
}
