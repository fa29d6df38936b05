use std::path::PathBuf;

use avocado_core::{ConfigError, FormField, GatewayConfig};
use clap::Parser;

use crate::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Avocado price prediction.
///
/// Fills the prediction form from the flags below (or interactively), sends
/// it to the prediction service and prints the predicted price. Field values
/// are taken as typed; numbers that cannot be read are sent as null.
#[derive(Debug, Parser)]
#[command(name = "avocado-price", version, about)]
pub struct Cli {
    /// Base URL of the prediction service. Defaults to the API_URL
    /// environment variable.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Quality grade 1 volume.
    #[arg(long, allow_hyphen_values = true)]
    pub quality1: Option<String>,

    /// Quality grade 2 volume.
    #[arg(long, allow_hyphen_values = true)]
    pub quality2: Option<String>,

    /// Quality grade 3 volume.
    #[arg(long, allow_hyphen_values = true)]
    pub quality3: Option<String>,

    /// Number of small bags.
    #[arg(long, allow_hyphen_values = true)]
    pub small_bags: Option<String>,

    /// Number of large bags.
    #[arg(long, allow_hyphen_values = true)]
    pub large_bags: Option<String>,

    /// Number of extra-large bags.
    #[arg(long, allow_hyphen_values = true)]
    pub xlarge_bags: Option<String>,

    /// Product type: `conventional` or `organic`.
    #[arg(long = "type", value_name = "TYPE")]
    pub product_type: Option<String>,

    /// Year, normally 2020 to 2030.
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Region code (see --list-regions).
    #[arg(long)]
    pub region: Option<String>,

    /// Prompt for every field on the terminal instead of sending once.
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Print the region catalog and exit.
    #[arg(long, default_value_t = false)]
    pub list_regions: bool,

    /// Log filter, e.g. `debug` or `avocado_gateway_http=trace`.
    /// Overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keep log output off the terminal.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Field edits given on the command line, in form order.
    pub fn field_edits(&self) -> Vec<(FormField, &str)> {
        [
            (FormField::Quality1, &self.quality1),
            (FormField::Quality2, &self.quality2),
            (FormField::Quality3, &self.quality3),
            (FormField::SmallBags, &self.small_bags),
            (FormField::LargeBags, &self.large_bags),
            (FormField::XLargeBags, &self.xlarge_bags),
            (FormField::ProductType, &self.product_type),
            (FormField::Year, &self.year),
            (FormField::Region, &self.region),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    /// Resolves the prediction service location: `--api-url` first, then
    /// the `API_URL` environment variable.
    ///
    /// A failure here is not fatal; it is reported on each submission.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ConfigError> {
        match &self.api_url {
            Some(url) => GatewayConfig::new(url.as_str()),
            None => GatewayConfig::from_env(),
        }
    }

    /// Applies the logging flags to the already initialized subscriber.
    pub fn apply_logging(&self) -> anyhow::Result<()> {
        if let Some(level) = &self.log_level {
            logging::set_log_level(level)?;
        }
        if let Some(path) = &self.log_file {
            logging::enable_file_logging(path)?;
        }
        if self.quiet {
            logging::set_console_enabled(false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_flags_become_edits_in_form_order() {
        let cli = Cli::parse_from([
            "avocado-price",
            "--region",
            "TotalUS",
            "--small-bags",
            "12",
            "--type",
            "organic",
            "--quality1",
            "-3",
        ]);

        assert_eq!(
            cli.field_edits(),
            vec![
                (FormField::Quality1, "-3"),
                (FormField::SmallBags, "12"),
                (FormField::ProductType, "organic"),
                (FormField::Region, "TotalUS"),
            ]
        );
    }

    #[test]
    fn api_url_flag_wins() {
        let cli = Cli::parse_from(["avocado-price", "--api-url", "http://localhost:9000"]);
        assert_eq!(
            cli.gateway_config().unwrap().predict_url(),
            "http://localhost:9000/predict"
        );
    }

    #[test]
    fn blank_api_url_flag_is_a_config_error() {
        let cli = Cli::parse_from(["avocado-price", "--api-url", " "]);
        assert_eq!(cli.gateway_config(), Err(ConfigError::EmptyApiUrl));
    }

    #[test]
    fn no_flags_means_no_edits() {
        let cli = Cli::parse_from(["avocado-price"]);
        assert!(cli.field_edits().is_empty());
        assert!(!cli.interactive);
    }
}
