use crate::domain::model::{FormField, OutputRegion, PriceQuote};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Access to the hosting form. The host supplies the controls and the two
/// readonly display regions; the reactor never touches anything else.
pub trait FormBindings: Send + Sync {
    /// Raw control value, `None` when the control is absent from the form.
    fn get_value(&self, field: FormField) -> Option<String>;

    /// Overwrites a display region. Regions are single-writer: only the
    /// reactor calls this.
    fn set_text(&self, region: OutputRegion, text: &str);
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_quote(
        &self,
        service_tier_id: &str,
        weight_handling_id: &str,
    ) -> Result<PriceQuote>;
}

pub trait ReactorConfig: Send + Sync {
    fn pricing_url(&self) -> &str;

    /// `None` keeps the original behavior: no timeout on the lookup call.
    fn timeout_seconds(&self) -> Option<u64>;
}
