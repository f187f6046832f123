//! Outbound calls to the GaragePro server.
//!
//! [`GarageApi`] is the seam between the page controller and the network;
//! [`HttpApi`] is the `fetch`-backed implementation used in the browser.

use crate::dom;
use crate::errors::{WebError, WebResult};
use async_trait::async_trait;
use garagepro_core::search::parse_results;
use garagepro_core::stats::DASHBOARD_STATS_ENDPOINT;
use garagepro_core::{DashboardStats, SearchQuery, SearchResult, ServiceToggleRequest, ToggleResponse};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[async_trait(?Send)]
pub trait GarageApi {
    /// Succeeds only on a 2xx reply whose body reports `success: true`.
    async fn toggle_service(&self, request: &ServiceToggleRequest) -> WebResult<()>;
    async fn search(&self, query: &SearchQuery) -> WebResult<Vec<SearchResult>>;
    async fn dashboard_stats(&self) -> WebResult<DashboardStats>;
}

/// `fetch` against the page's own origin (or `base_url` when set).
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: &str, path: &str, json_body: Option<String>) -> WebResult<String> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = &json_body {
            opts.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(&self.url(path), &opts)?;
        if json_body.is_some() {
            request.headers().set("Content-Type", "application/json")?;
        }
        request.headers().set("Accept", "application/json")?;

        let reply = JsFuture::from(dom::window()?.fetch_with_request(&request)).await?;
        let response: Response = reply.dyn_into()?;
        let status = response.status();
        let text = JsFuture::from(response.text()?).await?;
        let body = text.as_string().unwrap_or_default();
        debug!(method, path, status, "request finished");
        if !response.ok() {
            return Err(WebError::Http { status });
        }
        Ok(body)
    }
}

#[async_trait(?Send)]
impl GarageApi for HttpApi {
    async fn toggle_service(&self, request: &ServiceToggleRequest) -> WebResult<()> {
        let body = self.send("POST", &request.path(), Some(request.body()?)).await?;
        let reply: ToggleResponse =
            serde_json::from_str(&body).map_err(|e| WebError::Decode(e.to_string()))?;
        if reply.success {
            Ok(())
        } else {
            Err(WebError::Rejected(reply.failure_reason()))
        }
    }

    async fn search(&self, query: &SearchQuery) -> WebResult<Vec<SearchResult>> {
        let body = self.send("GET", &query.path(), None).await?;
        Ok(parse_results(&body)?)
    }

    async fn dashboard_stats(&self) -> WebResult<DashboardStats> {
        let body = self.send("GET", DASHBOARD_STATS_ENDPOINT, None).await?;
        serde_json::from_str(&body).map_err(|e| WebError::Decode(e.to_string()))
    }
}
