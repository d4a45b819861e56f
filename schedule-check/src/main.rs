use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use schedule_check::check;
use schedule_check::config::{
    CheckConfig, DEFAULT_ROUTES_PATH, DEFAULT_SCHEDULES_PATH, OutputFormat, WarningsPolicy,
};
use schedule_check::report::reporter_for;

/// Exit code for runs that could not complete.
const EXIT_FATAL: u8 = 2;

/// Check schedule files against the route database.
#[derive(Parser, Debug)]
#[command(name = "schedule-check", version, about)]
struct Cli {
    /// Route database (JSON or YAML list of records with an `id`)
    #[arg(long, env = "SCHEDULE_CHECK_ROUTES", default_value = DEFAULT_ROUTES_PATH)]
    routes: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit successfully even when warnings are reported
    #[arg(long)]
    allow_warnings: bool,

    /// Schedule files, or directories to search for *.yaml / *.yml
    #[arg(env = "SCHEDULE_CHECK_SCHEDULES", default_value = DEFAULT_SCHEDULES_PATH)]
    schedules: Vec<PathBuf>,
}

impl Cli {
    fn into_config(self) -> CheckConfig {
        let warnings = if self.allow_warnings {
            WarningsPolicy::Allow
        } else {
            WarningsPolicy::Fail
        };

        CheckConfig::new(self.routes, self.schedules)
            .with_format(self.format)
            .with_warnings(warnings)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config();

    match run(&config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(config: &CheckConfig) -> anyhow::Result<u8> {
    let stdout = io::stdout();
    let mut reporter = reporter_for(config.format, stdout.lock());

    let summary = check::run(config, &mut *reporter)
        .with_context(|| format!("checking schedules against {}", config.routes.display()))?;

    Ok(summary.exit_code(config.warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "schedule-check",
            "--routes",
            "db/routes.json",
            "--format",
            "json",
            "--allow-warnings",
            "a.yaml",
            "more",
        ])
        .unwrap();

        let config = cli.into_config();
        assert_eq!(config.routes, PathBuf::from("db/routes.json"));
        assert_eq!(
            config.schedules,
            vec![PathBuf::from("a.yaml"), PathBuf::from("more")]
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.warnings, WarningsPolicy::Allow);
    }
}
