use crate::domain::model::{FormField, OutputRegion};
use crate::domain::ports::FormBindings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory `FormBindings`: a host-independent stand-in for the admin form.
/// The CLI fills one from its arguments; tests drive it directly. Clones
/// share the same underlying state.
#[derive(Clone, Default)]
pub struct FormSnapshot {
    values: Arc<Mutex<HashMap<FormField, String>>>,
    outputs: Arc<Mutex<HashMap<OutputRegion, String>>>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes a control present with the given raw value. An empty string is
    /// a present-but-unselected control, not an absent one.
    pub fn set_value(&self, field: FormField, value: impl Into<String>) {
        self.values.lock().unwrap().insert(field, value.into());
    }

    /// Drops a control entirely, as a form without that field would.
    pub fn remove_field(&self, field: FormField) {
        self.values.lock().unwrap().remove(&field);
    }

    pub fn output(&self, region: OutputRegion) -> Option<String> {
        self.outputs.lock().unwrap().get(&region).cloned()
    }
}

impl FormBindings for FormSnapshot {
    fn get_value(&self, field: FormField) -> Option<String> {
        self.values.lock().unwrap().get(&field).cloned()
    }

    fn set_text(&self, region: OutputRegion, text: &str) {
        self.outputs
            .lock()
            .unwrap()
            .insert(region, text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_reads_as_none() {
        let form = FormSnapshot::new();
        assert!(form.get_value(FormField::PayingBill).is_none());

        form.set_value(FormField::PayingBill, "5");
        assert_eq!(form.get_value(FormField::PayingBill).unwrap(), "5");

        form.remove_field(FormField::PayingBill);
        assert!(form.get_value(FormField::PayingBill).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let form = FormSnapshot::new();
        let handle = form.clone();
        handle.set_text(OutputRegion::TotalAmount, "30.00");
        assert_eq!(form.output(OutputRegion::TotalAmount).unwrap(), "30.00");
    }
}
