// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod plan;

use clap::{Parser, ValueEnum};
use error::CliError;
use plan::Plan;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use vacation_plan_domain::{ErrorReport, InMemoryDirectory, VacationRequestValidationEngine};

/// Exit status when the plan violates the scheduling policy.
const EXIT_VIOLATIONS: u8 = 1;
/// Exit status when the plan could not be checked at all.
const EXIT_FAILURE: u8 = 2;

/// Vacation Plan - checks a yearly vacation plan against the scheduling policy
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON plan document, or `-` to read standard input.
    #[arg(short, long)]
    plan: PathBuf,

    /// How to print the violation report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Report output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `field: message` line per violation.
    Text,
    /// The report as a JSON object of field name to messages.
    Json,
}

/// Loads the plan at `args.plan` and validates it.
fn check(args: &Args) -> Result<ErrorReport, CliError> {
    let plan: Plan = Plan::load(&args.plan)?;
    let (engine, directory): (VacationRequestValidationEngine, InMemoryDirectory) =
        plan.into_parts();

    Ok(engine.validate(&directory)?)
}

/// Renders `report` in the requested format.
fn render(report: &ErrorReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(CliError::Render),
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::with_capacity(report.len());
            for field in report.fields() {
                for message in report.messages(field) {
                    lines.push(format!("{field}: {message}"));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so the report on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(plan = %args.plan.display(), "Checking vacation plan");

    let report: ErrorReport = match check(&args) {
        Ok(report) => report,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match render(&report, args.format) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    }

    if report.is_empty() {
        info!("Plan satisfies the scheduling policy");
        ExitCode::SUCCESS
    } else {
        info!(violations = report.len(), "Plan violates the scheduling policy");
        ExitCode::from(EXIT_VIOLATIONS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use vacation_plan_domain::VACATION_REQUESTS_FIELD;

    fn create_test_report() -> ErrorReport {
        let mut report: ErrorReport = ErrorReport::new();
        report.add(
            VACATION_REQUESTS_FIELD,
            "Vacations with ids [1, 2] are overlapping",
        );
        report.add(VACATION_REQUESTS_FIELD, "Contains non-request elements");
        report
    }

    #[test]
    fn test_text_output_prefixes_field() {
        let output: String = render(&create_test_report(), OutputFormat::Text).unwrap();

        assert_eq!(
            output,
            "vacation_requests: Vacations with ids [1, 2] are overlapping\n\
             vacation_requests: Contains non-request elements"
        );
    }

    #[test]
    fn test_empty_report_renders_nothing_as_text() {
        let output: String = render(&ErrorReport::new(), OutputFormat::Text).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_json_output_is_field_map() {
        let output: String = render(&create_test_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "vacation_requests": [
                    "Vacations with ids [1, 2] are overlapping",
                    "Contains non-request elements"
                ]
            })
        );
    }

    #[test]
    fn test_check_reads_and_validates_plan_file() {
        let mut file: NamedTempFile = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "employees": [{ "id": 1, "full_name": "Jane Doe" }],
                "vacation_requests": [
                    { "id": 1, "user_id": 1, "starts_at_week": 1, "ends_at_week": 2 },
                    null,
                    { "id": 2, "user_id": 1, "starts_at_week": 3, "ends_at_week": 4 }
                ]
            }"#,
        )
        .unwrap();
        let args: Args = Args {
            plan: file.path().to_path_buf(),
            format: OutputFormat::Text,
        };

        let report: ErrorReport = check(&args).unwrap();

        assert_eq!(
            report.messages(VACATION_REQUESTS_FIELD),
            ["Vacations with ids [1, 2] of user Jane Doe are planned to close"]
        );
    }

    #[test]
    fn test_check_reports_malformed_plan_file() {
        let mut file: NamedTempFile = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"vacation_requests\": [").unwrap();
        let args: Args = Args {
            plan: file.path().to_path_buf(),
            format: OutputFormat::Json,
        };

        assert!(matches!(check(&args), Err(CliError::Parse(_))));
    }

    #[test]
    fn test_args_parse_plan_and_format() {
        let args: Args =
            Args::try_parse_from(["vacation-plan", "--plan", "plan.json", "--format", "json"])
                .unwrap();

        assert_eq!(args.plan, PathBuf::from("plan.json"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_args_default_to_text() {
        let args: Args = Args::try_parse_from(["vacation-plan", "-p", "-"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_args_require_plan() {
        assert!(Args::try_parse_from(["vacation-plan"]).is_err());
    }

    #[test]
    fn test_args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
