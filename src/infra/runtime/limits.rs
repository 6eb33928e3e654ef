use std::time::Duration;

use crate::infra::config::ApiConfig;

/// Build the outbound HTTP client.
///
/// Only the connect phase is bounded by default; a whole-request timeout is
/// applied only when configured.
pub fn make_http_client(cfg: &ApiConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms));
    if let Some(ms) = cfg.timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    builder.build()
}
