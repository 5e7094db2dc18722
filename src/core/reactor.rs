use crate::domain::model::{parse_amount, FormEvent, FormField, InputState, OutputRegion};
use crate::domain::ports::{FormBindings, PriceSource};
use crate::domain::services::InvoiceMath;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shown while either category is unselected or the weight is zero.
pub const INCOMPLETE_PROMPT: &str = "Select service tier, weight handling, and enter weight";
/// Credit placeholder for the incomplete state.
pub const CREDIT_PLACEHOLDER: &str = "-";
/// Shown in the total region when the pricing lookup fails.
pub const CALC_ERROR_TEXT: &str = "Error calculating total";

/// Keeps the two display regions consistent with the form inputs. One
/// lookup per recompute, no caching, no retry; a generation counter makes
/// sure concurrent in-flight lookups cannot overwrite a newer result with
/// an older one.
pub struct FormReactor<B: FormBindings, P: PriceSource> {
    bindings: B,
    prices: P,
    generation: AtomicU64,
}

impl<B: FormBindings, P: PriceSource> FormReactor<B, P> {
    /// Binds to the form and runs the initial recompute so the display
    /// reflects current state without user interaction.
    ///
    /// Yields `None` when any of the three mandatory controls is absent:
    /// the page is not the invoice form and the reactor stays out of it.
    /// Binding more than once over the same host is safe; each reactor
    /// only ever writes full region contents.
    pub async fn bind(bindings: B, prices: P) -> Option<Self> {
        for field in [
            FormField::WeightKg,
            FormField::ServiceTier,
            FormField::WeightHandling,
        ] {
            if bindings.get_value(field).is_none() {
                tracing::debug!(?field, "mandatory control absent, not wiring calculator");
                return None;
            }
        }

        let reactor = Self {
            bindings,
            prices,
            generation: AtomicU64::new(0),
        };
        reactor.recompute().await;
        Some(reactor)
    }

    /// Entry point for the hosting form's input/change events.
    pub async fn handle_event(&self, event: FormEvent) {
        tracing::debug!(?event, "form event");
        self.recompute().await;
    }

    fn read_inputs(&self) -> InputState {
        InputState {
            weight_kg: parse_amount(self.bindings.get_value(FormField::WeightKg).as_deref()),
            service_tier_id: self
                .bindings
                .get_value(FormField::ServiceTier)
                .unwrap_or_default(),
            weight_handling_id: self
                .bindings
                .get_value(FormField::WeightHandling)
                .unwrap_or_default(),
            paying_bill: parse_amount(self.bindings.get_value(FormField::PayingBill).as_deref()),
        }
    }

    pub async fn recompute(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let input = self.read_inputs();

        if !input.is_complete() {
            self.bindings
                .set_text(OutputRegion::TotalAmount, INCOMPLETE_PROMPT);
            self.bindings
                .set_text(OutputRegion::CreditAmount, CREDIT_PLACEHOLDER);
            return;
        }

        let outcome = self
            .prices
            .fetch_quote(&input.service_tier_id, &input.weight_handling_id)
            .await;

        // Another recompute started while this one was suspended at the
        // network boundary; its result supersedes this one.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "dropping stale pricing response");
            return;
        }

        match outcome {
            Ok(quote) => {
                let total = InvoiceMath::total_amount(&input, &quote);
                let credit = InvoiceMath::credit_amount(total, input.paying_bill);
                self.bindings
                    .set_text(OutputRegion::TotalAmount, &InvoiceMath::format_amount(total));
                self.bindings
                    .set_text(OutputRegion::CreditAmount, &InvoiceMath::format_amount(credit));
            }
            Err(e) => {
                tracing::error!("Error fetching prices: {}", e);
                // Only the total region shows the failure; the credit
                // region keeps whatever it displayed before.
                self.bindings
                    .set_text(OutputRegion::TotalAmount, CALC_ERROR_TEXT);
            }
        }
    }
}
