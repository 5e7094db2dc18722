use clap::Parser;
use invoice_reactor::domain::model::{FormField, OutputRegion};
use invoice_reactor::utils::{logger, validation::Validate};
use invoice_reactor::{CliConfig, FormReactor, FormSnapshot, HttpPriceSource, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting invoice-reactor CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Endpoint settings come from the TOML file when one is given, from the
    // CLI flags otherwise.
    let prices = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            tracing::debug!("Loaded pricing settings from {}", path.display());
            HttpPriceSource::new(&file)?
        }
        None => HttpPriceSource::new(&config)?,
    };

    let form = FormSnapshot::new();
    form.set_value(FormField::WeightKg, config.weight_kg.clone());
    form.set_value(FormField::ServiceTier, config.service_tier_id.clone());
    form.set_value(FormField::WeightHandling, config.weight_handling_id.clone());
    if let Some(bill) = &config.paying_bill {
        form.set_value(FormField::PayingBill, bill.clone());
    }

    // bind runs the initial recompute, which is all a one-shot needs.
    if FormReactor::bind(form.clone(), prices).await.is_none() {
        anyhow::bail!("form is missing a mandatory control");
    }

    let placeholder = || "-".to_string();
    println!(
        "Total amount:  {}",
        form.output(OutputRegion::TotalAmount).unwrap_or_else(placeholder)
    );
    println!(
        "Credit amount: {}",
        form.output(OutputRegion::CreditAmount).unwrap_or_else(placeholder)
    );

    Ok(())
}
