//! Decision-Notice Classification Binary
//!
//! Reads case facts as JSON and prints the decision notice classification.
//!
//! # Usage
//!
//! ```bash
//! # Classify facts from a file
//! decision-notice case.json
//!
//! # Classify facts from stdin, pretty-printed
//! DECISION_PRETTY=true decision-notice < case.json
//! ```
//!
//! # Environment Variables
//!
//! * `DECISION_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `DECISION_PRETTY` - Pretty-print the JSON output (default: false)
//! * `DECISION_JSON_LOGS` - Emit logs as JSON lines (default: false)
//!
//! # Exit Status
//!
//! * `0` - The facts resolved to a scenario
//! * `1` - The configuration or input could not be read or parsed
//! * `2` - The facts failed validation; the message is printed

use std::path::PathBuf;

use anyhow::Context;
use domain_decision::DecisionNoticeService;
use interface_cli::{config::CliConfig, init_tracing, load_input, process, CliResponse};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            let response = CliResponse::from_result(Err(error));
            println!("{}", response.render(false).context("Failed to render response")?);
            std::process::exit(response.exit_code());
        }
    };
    init_tracing(&config);

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    tracing::debug!(path = ?path, "Reading case facts");

    let service = DecisionNoticeService::new();
    let result = load_input(path.as_deref()).and_then(|input| process(&input, &service));
    let response = CliResponse::from_result(result);

    let body = response
        .render(config.pretty)
        .context("Failed to render response")?;
    println!("{}", body);

    std::process::exit(response.exit_code())
}
