use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use avocado_core::{PredictionForm, Region, SubmitOutcome};
use avocado_gateway_http::HttpPredictionGateway;
use avocado_ui::{Cli, logging, run_interactive, run_once, terminal::TerminalObserver};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_default_logging();

    let cli = Cli::parse();
    cli.apply_logging()?;

    if cli.list_regions {
        for (label, value) in Region::catalog() {
            println!("{value:<20}{label}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.gateway_config();
    match &config {
        Ok(config) => debug!(url = %config.predict_url(), "prediction service configured"),
        Err(e) => warn!(error = %e, "no prediction service configured; submissions will fail"),
    }
    let gateway = HttpPredictionGateway::new(config);

    let mut form = PredictionForm::new();
    for (field, raw) in cli.field_edits() {
        form.set_field(field, raw)
            .with_context(|| format!("invalid value for {field}"))?;
    }

    let observer = TerminalObserver::new(io::stderr());
    let mut stdout = io::stdout().lock();

    if cli.interactive {
        let mut stdin = io::stdin().lock();
        run_interactive(&mut form, &gateway, &observer, &mut stdin, &mut stdout).await?;
        return Ok(ExitCode::SUCCESS);
    }

    match run_once(&mut form, &gateway, &observer, &mut stdout).await? {
        SubmitOutcome::Predicted(_) => Ok(ExitCode::SUCCESS),
        SubmitOutcome::Failed(_) => Ok(ExitCode::FAILURE),
    }
}
