use std::time::Duration;

use reqwest::Client;
use tracing::info;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared outbound client. Every request made through it is
/// bounded by `timeout`.
pub fn create_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    info!("HTTP client ready (timeout {:?}).", timeout);
    Ok(client)
}
