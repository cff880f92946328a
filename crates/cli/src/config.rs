//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

use phonestock_observability::{LogConfig, LogFormat};

/// Environment variable consulted for the log filter before `RUST_LOG`.
pub const LOG_ENV: &str = "PHONESTOCK_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "phonestock")]
#[command(about = "Cell phone inventory management console")]
#[command(version)]
pub struct Cli {
    /// Log line encoding (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Log filter directive, e.g. `info` or `phonestock_inventory=debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        let filter = resolve_filter(
            self.log_level.clone(),
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        );
        LogConfig {
            filter,
            format: self.log_format.into(),
        }
    }
}

/// First non-blank of: flag, `PHONESTOCK_LOG`, `RUST_LOG`, default.
pub fn resolve_filter(
    flag: Option<String>,
    app_env: Option<String>,
    rust_log: Option<String>,
) -> String {
    [flag, app_env, rust_log]
        .into_iter()
        .flatten()
        .find(|f| !f.trim().is_empty())
        .unwrap_or_else(|| LogConfig::default().filter)
}
