use std::time::Instant;

use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::config::Config;

pub fn make_client(config: &Config) -> crate::Result<Client> {
    Ok(Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .gzip(true)
        .build()?)
}

/// One GET, no retries. Non-2xx statuses count as failures.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: &Url) -> crate::Result<String> {
    let start = Instant::now();
    let res = client.get(url.clone()).send().await?.error_for_status()?;
    let text = res.text().await?;
    log::trace!("Got menu page in \t {:?}", start.elapsed());
    Ok(text)
}
