// Adapters layer: concrete implementations for external systems (http
// pricing endpoint, host form bindings).

pub mod http;
pub mod snapshot;

pub use http::HttpPriceSource;
pub use snapshot::FormSnapshot;
