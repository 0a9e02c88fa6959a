//! # vcflow-cli -- Issue-and-verify demonstration
//!
//! Drives a verifiable-credentials service through its happy path:
//! onboard an issuer, issue a JWT credential, request verification.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; sequencing lives in [`pipeline`].
//! - All HTTP goes through `vcflow-client`. Nothing here builds requests.
//! - Response bodies go to stdout, diagnostics go to stderr.

pub mod pipeline;

use std::path::{Path, PathBuf};

use anyhow::Context;
use vcflow_client::{Fixtures, VcClient, VcServiceConfig};

/// Environment variable naming a fixture file, used when `--fixtures` is absent.
pub const FIXTURES_ENV: &str = "VCFLOW_FIXTURES";

/// Pick the fixture file: the command-line flag wins over the environment.
pub fn fixtures_path(flag: Option<PathBuf>, env: Option<String>) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
}

/// Load fixtures from `path`, or the built-in samples when no path is given.
pub fn load_fixtures(path: Option<&Path>) -> anyhow::Result<Fixtures> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading fixtures");
            Fixtures::from_file(path).context("loading request fixtures")
        }
        None => Ok(Fixtures::default()),
    }
}

/// Build the service client from environment configuration and fixtures.
pub fn build_client(fixtures_file: Option<&Path>) -> anyhow::Result<VcClient> {
    let config = VcServiceConfig::from_env().context("reading service configuration")?;
    tracing::debug!(
        issuer_api = %config.issuer_api_url,
        verifier_api = %config.verifier_api_url,
        timeout_secs = config.timeout_secs,
        "service configuration"
    );
    let fixtures = load_fixtures(fixtures_file)?;
    VcClient::new(config, fixtures).context("building service client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flag_wins_over_env() {
        let picked = fixtures_path(Some("flag.json".into()), Some("env.json".into()));
        assert_eq!(picked, Some(PathBuf::from("flag.json")));
    }

    #[test]
    fn env_used_when_flag_absent() {
        assert_eq!(
            fixtures_path(None, Some("env.json".into())),
            Some(PathBuf::from("env.json"))
        );
        assert_eq!(fixtures_path(None, Some("  ".into())), None);
        assert_eq!(fixtures_path(None, None), None);
    }

    #[test]
    fn no_path_means_builtin_fixtures() {
        assert_eq!(load_fixtures(None).unwrap(), Fixtures::default());
    }

    #[test]
    fn fixture_file_errors_carry_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"onboarding": 42}}"#).unwrap();

        let err = load_fixtures(Some(file.path())).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("loading request fixtures"), "{rendered}");
        assert!(rendered.contains("malformed fixtures"), "{rendered}");
    }
}
