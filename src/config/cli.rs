use crate::domain::ports::ReactorConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

/// One-shot evaluation of an invoice form snapshot against the pricing
/// endpoint. Input values are taken verbatim; unparseable amounts count as
/// zero, exactly as on the form itself.
#[derive(Debug, Clone, Parser)]
#[command(name = "invoice-reactor")]
#[command(about = "Compute shipping invoice totals from the pricing endpoint")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "http://localhost:8000/admin/shipping/invoice/get-prices/"
    )]
    pub pricing_url: String,

    #[arg(long, help = "Timeout for the pricing call; unset means no timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Load pricing endpoint settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "0")]
    pub weight_kg: String,

    #[arg(long, default_value = "")]
    pub service_tier_id: String,

    #[arg(long, default_value = "")]
    pub weight_handling_id: String,

    #[arg(long, help = "Amount already paid; omit if the form has no such field")]
    pub paying_bill: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ReactorConfig for CliConfig {
    fn pricing_url(&self) -> &str {
        &self.pricing_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("pricing_url", &self.pricing_url)?;
        if let Some(seconds) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", seconds, 1)?;
        }
        Ok(())
    }
}
