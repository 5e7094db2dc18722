pub mod reactor;

pub use crate::domain::model::{FormEvent, FormField, InputState, OutputRegion, PriceQuote};
pub use crate::domain::ports::{FormBindings, PriceSource, ReactorConfig};
pub use crate::utils::error::Result;
