//! Shared outbound HTTP client.

use std::time::Duration;

use reqwest::Client;

/// User-Agent sent on every outbound request unless a provider overrides it
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Minecraft-Skin-Proxy/1.0";

/// Builds the client used for provider lookups and texture downloads.
///
/// One client is shared by the whole process so connections are pooled
/// across requests. `timeout` bounds each request end to end.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
