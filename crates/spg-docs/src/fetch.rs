use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use spg_core::config::DocsConfig;

use crate::error::DocsError;

/// Client for fetching per-operation documentation pages.
///
/// Requests are bounded by the configured timeout and redirects are not
/// followed. Callers treat every failure as "no shape available"; nothing
/// here is fatal to a generation run.
pub struct DocsClient {
    client: Client,
    url_template: String,
}

impl DocsClient {
    pub fn new(config: &DocsConfig) -> Result<Self, DocsError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(DocsError::Client)?;
        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    /// Fetch the raw documentation page for one operation. Non-2xx
    /// statuses are errors.
    pub fn fetch_operation_page(
        &self,
        service_name: &str,
        method_name: &str,
    ) -> Result<String, DocsError> {
        let url = self.page_url(service_name, method_name);
        log::debug!("fetching documentation page {url}");
        let text = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(text)
    }

    fn page_url(&self, service_name: &str, method_name: &str) -> String {
        self.url_template
            .replace("{service}", service_name)
            .replace("{method}", method_name)
    }
}
