use serde::{Deserialize, Deserializer, Serialize};

/// Named controls of the hosting invoice form. Weight, service tier and
/// weight handling are mandatory; paying bill may be absent (read-only
/// deployments drop it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    WeightKg,
    ServiceTier,
    WeightHandling,
    PayingBill,
}

/// Read-only display regions the reactor writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputRegion {
    TotalAmount,
    CreditAmount,
}

/// Events the hosting form forwards to the reactor. Every event triggers a
/// full recompute; re-firing with an unchanged value is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    WeightInput,
    ServiceTierChange,
    WeightHandlingChange,
    PayingBillInput,
}

/// Snapshot of the form inputs at the moment of a recompute. Read fresh from
/// the bindings on every event, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub weight_kg: f64,
    /// Opaque identifier, empty string means unselected.
    pub service_tier_id: String,
    pub weight_handling_id: String,
    pub paying_bill: f64,
}

impl InputState {
    /// A lookup only makes sense once both categories are selected and the
    /// weight is non-zero.
    pub fn is_complete(&self) -> bool {
        !self.service_tier_id.is_empty()
            && !self.weight_handling_id.is_empty()
            && self.weight_kg != 0.0
    }
}

/// One pricing lookup result. Fetched per calculation, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(default, deserialize_with = "missing_as_zero")]
    pub service_price: f64,
    #[serde(default, deserialize_with = "missing_as_zero")]
    pub handling_rate: f64,
}

// The endpoint returns 0 for unknown ids but older deployments emit null.
fn missing_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Parses a raw control value as an amount. Missing, blank or non-numeric
/// input counts as 0, matching how the form treats untouched fields.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
