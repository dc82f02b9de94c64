//! Shared helpers for tests that talk to a wiremock server

use crate::{ClientConfig, ProductPlanClient};

pub(crate) const TOKEN: &str = "productplan-token";

/// Client pointed at `base_url`, authenticated with [`TOKEN`]
pub(crate) fn client_for(base_url: &str) -> ProductPlanClient {
    ProductPlanClient::with_config(ClientConfig::new(base_url, TOKEN)).expect("client should build")
}

/// Run blocking client code off the async test runtime.
///
/// The blocking client must be created, used and dropped inside `f`.
pub(crate) async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
