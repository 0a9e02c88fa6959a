//! The three-step issue-and-verify pipeline.
//!
//! Steps run strictly in order. The first failure ends the run; later steps
//! are never attempted and nothing is rolled back.

use std::fmt;
use std::io::Write;

use vcflow_client::issuer::{ISSUE_JWT_PATH, ONBOARD_ISSUER_PATH};
use vcflow_client::verifier::VERIFY_PATH;
use vcflow_client::{VcClient, VcServiceError};

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    OnboardIssuer,
    IssueCredential,
    VerifyCredential,
}

impl Step {
    /// Every step, in execution order.
    pub const ALL: [Step; 3] = [Step::OnboardIssuer, Step::IssueCredential, Step::VerifyCredential];

    /// Endpoint path the step calls.
    pub fn path(self) -> &'static str {
        match self {
            Step::OnboardIssuer => ONBOARD_ISSUER_PATH,
            Step::IssueCredential => ISSUE_JWT_PATH,
            Step::VerifyCredential => VERIFY_PATH,
        }
    }

    fn progress(self) -> &'static str {
        match self {
            Step::OnboardIssuer => "Onboarding issuer",
            Step::IssueCredential => "Issuing credential",
            Step::VerifyCredential => "Verifying credential",
        }
    }

    fn success(self) -> &'static str {
        match self {
            Step::OnboardIssuer => "Onboarded issuer",
            Step::IssueCredential => "Credential issued",
            Step::VerifyCredential => "Credential verified",
        }
    }

    async fn invoke(self, client: &VcClient) -> Result<String, VcServiceError> {
        match self {
            Step::OnboardIssuer => client.onboard_issuer().await,
            Step::IssueCredential => client.issue_credential().await,
            Step::VerifyCredential => client.verify_credential().await,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::OnboardIssuer => "onboarding",
            Step::IssueCredential => "credential issuance",
            Step::VerifyCredential => "credential verification",
        })
    }
}

/// Result of a completed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    /// Raw response body, exactly as the service returned it.
    pub body: String,
}

/// Why the pipeline stopped.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A service call failed. No later step was attempted.
    #[error("{step} failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: VcServiceError,
    },
    /// Writing a step result to the output failed.
    #[error("failed to write step output: {0}")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    /// The step that failed, if the failure came from the service.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Step { step, .. } => Some(*step),
            Self::Output(_) => None,
        }
    }

    /// Raw response body of the failed call, if the service answered.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Step { source, .. } => source.response_body(),
            Self::Output(_) => None,
        }
    }
}

/// Run onboarding, issuance, and verification in order.
///
/// After each successful step a success line and the raw response body are
/// written to `out`. Returns the outcomes of all three steps, or the first
/// failure.
pub async fn run_pipeline<W: Write>(
    client: &VcClient,
    out: &mut W,
) -> Result<Vec<StepOutcome>, PipelineError> {
    let mut outcomes = Vec::with_capacity(Step::ALL.len());

    for step in Step::ALL {
        tracing::info!(path = step.path(), "{} via {} ...", step.progress(), step.path());

        let body = step
            .invoke(client)
            .await
            .map_err(|source| PipelineError::Step { step, source })?;

        writeln!(out, "{}. Response:", step.success())?;
        writeln!(out, "{body}")?;
        out.flush()?;

        outcomes.push(StepOutcome { step, body });
    }

    tracing::info!(steps = outcomes.len(), "flow completed");
    Ok(outcomes)
}

/// Write a terminal failure report: the error, then the raw response body
/// (empty when the request never completed).
pub fn report_failure<W: Write>(err: &PipelineError, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "error: {err}")?;
    writeln!(out, "Response: {}", err.response_body().unwrap_or_default())?;
    out.flush()
}
