use crate::domain::model::{InputState, PriceQuote};

pub struct InvoiceMath;

impl InvoiceMath {
    /// Formula: weight_kg * price_per_kg_usd * rate_tsh_per_kg
    pub fn total_amount(input: &InputState, quote: &PriceQuote) -> f64 {
        input.weight_kg * quote.service_price * quote.handling_rate
    }

    /// Formula: total_amount - paying_bill
    pub fn credit_amount(total: f64, paying_bill: f64) -> f64 {
        total - paying_bill
    }

    /// Amounts are always displayed with exactly two decimals.
    pub fn format_amount(value: f64) -> String {
        format!("{:.2}", value)
    }
}
