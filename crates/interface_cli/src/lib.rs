//! Command-Line Interface Layer
//!
//! This crate exposes the decision-notice engine to the case-management
//! backend as a small command: case facts go in as JSON, the decision notice
//! (or a review message) comes out as JSON.
//!
//! # Architecture
//!
//! - **Config**: `DECISION_*` environment variables, with `.env` support
//! - **Error Handling**: Consistent error bodies and exit statuses
//! - **Logging**: `tracing` events on stderr, filtered by `RUST_LOG` or the configured level
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{process, CliResponse};
//!
//! let response = CliResponse::from_result(process(&input, &service));
//! println!("{}", response.render(false)?);
//! std::process::exit(response.exit_code());
//! ```

pub mod config;
pub mod error;

use std::io::Read;
use std::path::Path;

use domain_decision::{CaseFacts, DecisionError, DecisionNotice, DecisionNoticeService};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;
use crate::error::{CliError, ErrorResponse, EXIT_SUCCESS};

/// Reads the raw input from a file, or from stdin when no path is given
pub fn load_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses case facts from JSON
pub fn parse_facts(input: &str) -> Result<CaseFacts, CliError> {
    Ok(serde_json::from_str(input)?)
}

/// Parses the input and classifies it
pub fn process(input: &str, service: &DecisionNoticeService) -> Result<DecisionNotice, CliError> {
    let facts = parse_facts(input)?;
    let notice = service.decide(&facts)?;
    info!(
        case_id = ?facts.case_id(),
        scenario = %notice.scenario,
        entitled = notice.entitlement.entitled,
        "Decision notice classified"
    );
    Ok(notice)
}

/// What the command prints, and the status it exits with
#[derive(Debug)]
pub enum CliResponse {
    Notice(DecisionNotice),
    Error { status: i32, body: ErrorResponse },
}

impl CliResponse {
    pub fn from_result(result: Result<DecisionNotice, CliError>) -> Self {
        match result {
            Ok(notice) => CliResponse::Notice(notice),
            Err(err) => {
                match &err {
                    CliError::Decision(DecisionError::Validation(validation)) => {
                        warn!(message = %validation, "Case facts failed validation");
                    }
                    other => error!(error = %other, "Classification failed"),
                }
                CliResponse::Error {
                    status: err.exit_code(),
                    body: err.to_response(),
                }
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliResponse::Notice(_) => EXIT_SUCCESS,
            CliResponse::Error { status, .. } => *status,
        }
    }

    /// Renders the response as JSON
    pub fn render(&self, pretty: bool) -> Result<String, serde_json::Error> {
        match (self, pretty) {
            (CliResponse::Notice(notice), true) => serde_json::to_string_pretty(notice),
            (CliResponse::Notice(notice), false) => serde_json::to_string(notice),
            (CliResponse::Error { body, .. }, true) => serde_json::to_string_pretty(body),
            (CliResponse::Error { body, .. }, false) => serde_json::to_string(body),
        }
    }
}

/// Initializes the tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
