//! # vacunas-cli — Vaccination Tracker Command-Line Interface
//!
//! Each subcommand is one screen of the tracker: it fetches a fresh snapshot
//! from the backend, renders it, or submits a single record.
//!
//! ## Subcommands
//!
//! - `pacientes` — list and register patients
//! - `vacunas` — list and register catalog vaccines
//! - `aplicaciones` — record dose applications
//! - `alertas` — classified alert board with counts
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to a caller-supplied `Write` so tests can capture output.
//! - Handlers return an exit code: 0 on success, 1 when a submission was
//!   rejected. Operational errors surface as `anyhow::Error`.

pub mod alerts;
pub mod applications;
pub mod patients;
pub mod render;
pub mod vaccines;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use vacunas_client::ClientConfig;

/// Backend connection options shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Path to a YAML configuration file (`api_url`, `timeout_secs`).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL. Overrides the config file and VACUNAS_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds. Overrides the config file and VACUNAS_TIMEOUT_SECS.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Resolve the client configuration: defaults, file, environment, then flags.
pub fn resolve_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let mut config =
        ClientConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    if let Some(ref url) = args.api_url {
        config.base_url = ClientConfig::new(url)
            .context("invalid --api-url")?
            .base_url;
    }
    if let Some(secs) = args.timeout {
        config
            .set_timeout_secs(secs)
            .context("invalid --timeout")?;
    }

    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "resolved configuration");
    Ok(config)
}

/// Pretty-print a snapshot as JSON.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode JSON output")?;
    writeln!(out)?;
    Ok(())
}

/// Print the outcome of a submission and map it to an exit code.
pub(crate) fn report_submission(
    out: &mut dyn Write,
    ok: bool,
    success: &str,
    failure: &str,
) -> Result<u8> {
    if ok {
        writeln!(out, "{success}")?;
        Ok(0)
    } else {
        writeln!(out, "{failure}")?;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: http://from-file:8080").unwrap();
        writeln!(file, "timeout_secs: 9").unwrap();

        let args = ConnectionArgs {
            config: Some(file.path().to_path_buf()),
            api_url: Some("http://from-flag:9090".into()),
            timeout: None,
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.base_url.as_str(), "http://from-flag:9090/");
    }

    #[test]
    fn timeout_flag_applies() {
        let args = ConnectionArgs {
            config: None,
            api_url: Some("http://localhost:3000".into()),
            timeout: Some(3),
        };
        assert_eq!(resolve_config(&args).unwrap().timeout_secs, 3);
    }

    #[test]
    fn zero_timeout_flag_is_an_error() {
        let args = ConnectionArgs {
            config: None,
            api_url: Some("http://localhost:3000".into()),
            timeout: Some(0),
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --timeout"));
    }

    #[test]
    fn bad_api_url_is_an_error() {
        let args = ConnectionArgs {
            api_url: Some("::nope::".into()),
            ..Default::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn submission_report_sets_exit_code() {
        let mut out = Vec::new();
        assert_eq!(report_submission(&mut out, true, "bien", "mal").unwrap(), 0);
        assert_eq!(report_submission(&mut out, false, "bien", "mal").unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "bien\nmal\n");
    }
}
