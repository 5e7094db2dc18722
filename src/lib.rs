pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{FormSnapshot, HttpPriceSource};
pub use crate::core::reactor::FormReactor;
pub use crate::utils::error::{CalcError, Result};
