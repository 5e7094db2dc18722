use httpmock::prelude::*;
use invoice_reactor::core::{FormEvent, FormField, OutputRegion, ReactorConfig};
use invoice_reactor::{FormReactor, FormSnapshot, HttpPriceSource};

struct EndpointConfig {
    url: String,
}

impl ReactorConfig for EndpointConfig {
    fn pricing_url(&self) -> &str {
        &self.url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        None
    }
}

fn price_source(server: &MockServer) -> HttpPriceSource {
    HttpPriceSource::new(&EndpointConfig {
        url: server.url("/admin/shipping/invoice/get-prices/"),
    })
    .unwrap()
}

fn form_with(weight: &str, tier: &str, handling: &str, bill: Option<&str>) -> FormSnapshot {
    let form = FormSnapshot::new();
    form.set_value(FormField::WeightKg, weight);
    form.set_value(FormField::ServiceTier, tier);
    form.set_value(FormField::WeightHandling, handling);
    if let Some(bill) = bill {
        form.set_value(FormField::PayingBill, bill);
    }
    form
}

#[tokio::test]
async fn test_end_to_end_totals_from_live_quote() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/shipping/invoice/get-prices/")
            .query_param("service_tier_id", "3")
            .query_param("weight_handling_id", "7");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"service_price": 2.5, "handling_rate": 1.2}));
    });

    let form = form_with("10", "3", "7", Some("5"));
    FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(form.output(OutputRegion::TotalAmount).unwrap(), "30.00");
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "25.00");
}

#[tokio::test]
async fn test_incomplete_form_never_hits_the_endpoint() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/shipping/invoice/get-prices/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"service_price": 2.5, "handling_rate": 1.2}));
    });

    let form = form_with("10", "", "7", None);
    let reactor = FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();

    assert_eq!(
        form.output(OutputRegion::TotalAmount).unwrap(),
        "Select service tier, weight handling, and enter weight"
    );
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "-");

    // zero weight is just as incomplete
    form.set_value(FormField::ServiceTier, "3");
    form.set_value(FormField::WeightKg, "0");
    reactor.handle_event(FormEvent::WeightInput).await;

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_unknown_ids_price_to_zero() {
    // The endpoint answers zeros for unknown ids rather than erroring.
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/shipping/invoice/get-prices/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"service_price": 0, "handling_rate": 0}));
    });

    let form = form_with("10", "999", "999", None);
    FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();

    assert_eq!(form.output(OutputRegion::TotalAmount).unwrap(), "0.00");
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "0.00");
}

#[tokio::test]
async fn test_server_failure_leaves_credit_region_alone() {
    let server = MockServer::start();
    let mut ok_mock = server.mock(|when, then| {
        when.method(GET).path("/admin/shipping/invoice/get-prices/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"service_price": 2.5, "handling_rate": 1.2}));
    });

    let form = form_with("10", "3", "7", Some("5"));
    let reactor = FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "25.00");

    // endpoint starts failing after the first successful paint
    ok_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/admin/shipping/invoice/get-prices/");
        then.status(500);
    });

    reactor.handle_event(FormEvent::ServiceTierChange).await;

    assert_eq!(
        form.output(OutputRegion::TotalAmount).unwrap(),
        "Error calculating total"
    );
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "25.00");
}

#[tokio::test]
async fn test_rebinding_the_same_form_is_safe() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/shipping/invoice/get-prices/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"service_price": 2.5, "handling_rate": 1.2}));
    });

    let form = form_with("10", "3", "7", None);
    FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();
    let reactor = FormReactor::bind(form.clone(), price_source(&server))
        .await
        .unwrap();

    // one initial lookup per bind, nothing duplicated beyond that
    api_mock.assert_hits(2);
    assert_eq!(form.output(OutputRegion::TotalAmount).unwrap(), "30.00");
    assert_eq!(form.output(OutputRegion::CreditAmount).unwrap(), "30.00");

    // re-selecting the same value still recomputes, output unchanged
    reactor.handle_event(FormEvent::ServiceTierChange).await;
    api_mock.assert_hits(3);
    assert_eq!(form.output(OutputRegion::TotalAmount).unwrap(), "30.00");
}
