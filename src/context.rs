//! Application context shared by components and the event loop.

use crate::adapters::ReqwestHttpClient;
use crate::api::{ApiClient, HostedModelClient};
use crate::config::{Config, Session};
use crate::query::QueryClient;
use crate::traits::HttpClient;

/// Clients, cache and identity for one running dashboard.
///
/// Built once at startup and passed by reference; there is no global state.
pub struct AppContext<C: HttpClient> {
    pub api: ApiClient<C>,
    pub hosted: HostedModelClient<C>,
    pub queries: QueryClient,
    pub session: Session,
}

impl<C: HttpClient + Clone> AppContext<C> {
    /// Build a context whose clients share one transport.
    pub fn new(config: &Config, http: C) -> Self {
        let session = config.session();
        Self {
            api: ApiClient::new(config.api_url.clone(), http.clone(), session.clone()),
            hosted: HostedModelClient::new(
                config.inference_url.clone(),
                config.inference_api_key.clone(),
                http,
            ),
            queries: QueryClient::with_stale_time(config.stale_time),
            session,
        }
    }
}

impl AppContext<ReqwestHttpClient> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, ReqwestHttpClient::new())
    }
}
