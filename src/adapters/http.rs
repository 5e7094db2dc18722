use crate::domain::model::PriceQuote;
use crate::domain::ports::{PriceSource, ReactorConfig};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Production `PriceSource`: one GET against the admin pricing endpoint per
/// lookup. No retry; the timeout is whatever the config says, none by
/// default.
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    pub fn new(config: &impl ReactorConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        Ok(Self {
            client: builder.build()?,
            url: config.pricing_url().to_string(),
        })
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_quote(
        &self,
        service_tier_id: &str,
        weight_handling_id: &str,
    ) -> Result<PriceQuote> {
        tracing::debug!("Requesting prices from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("service_tier_id", service_tier_id),
                ("weight_handling_id", weight_handling_id),
            ])
            .send()
            .await?
            .error_for_status()?;

        let quote: PriceQuote = response.json().await?;
        tracing::debug!(?quote, "quote received");
        Ok(quote)
    }
}
