use super::App;
use crate::dom;
use crate::errors::WebResult;
use garagepro_core::search::{render_results, ERROR_MARKUP, LOADING_MARKUP};
use garagepro_core::sequence::SEARCH_OP;
use garagepro_core::{SearchAction, SearchQuery, SearchType};
use std::rc::Rc;
use tracing::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

impl App {
    pub(super) fn init_search(self: &Rc<Self>) -> WebResult<()> {
        let (Some(form), Some(input)) = (
            dom::by_id::<HtmlFormElement>(&self.document, "search-form"),
            dom::by_id::<HtmlInputElement>(&self.document, "search-input"),
        ) else {
            return Ok(());
        };

        let app = Rc::clone(self);
        dom::on(&form, "submit", move |event| {
            event.prevent_default();
            app.search_debounce.cancel();
            let app = Rc::clone(&app);
            spawn_local(async move { app.perform_search().await });
        })?;

        let app = Rc::clone(self);
        dom::on(&input, "input", move |_| {
            let task = Rc::clone(&app);
            let scheduled = app.search_debounce.schedule(move || {
                spawn_local(async move { task.perform_search().await });
            });
            if let Err(e) = scheduled {
                error!(error = %e, "failed to schedule search");
            }
        })?;
        Ok(())
    }

    fn search_type(&self) -> SearchType {
        let Some(select) = dom::by_id::<HtmlSelectElement>(&self.document, "search-type") else {
            return SearchType::All;
        };
        select.value().parse().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to search type 'all'");
            SearchType::All
        })
    }

    /// Run the search box's current query. Short input clears the results
    /// without a request; failures render inline in the results area.
    pub async fn perform_search(&self) {
        let (Some(input), Some(results)) = (
            dom::by_id::<HtmlInputElement>(&self.document, "search-input"),
            dom::by_id::<Element>(&self.document, "search-results"),
        ) else {
            return;
        };

        let query = match SearchQuery::evaluate(&input.value(), self.search_type(), self.config.search_min_chars) {
            SearchAction::Clear => {
                self.sequencer.borrow_mut().invalidate(SEARCH_OP);
                results.set_inner_html("");
                return;
            }
            SearchAction::Query(q) => q,
        };

        let ticket = self.sequencer.borrow_mut().issue(SEARCH_OP);
        results.set_inner_html(LOADING_MARKUP);
        let outcome = self.api.search(&query).await;
        if !self.sequencer.borrow().is_current(&ticket) {
            return;
        }
        match outcome {
            Ok(found) => results.set_inner_html(&render_results(&found)),
            Err(e) => {
                error!(error = %e, "search error");
                results.set_inner_html(ERROR_MARKUP);
            }
        }
    }
}
