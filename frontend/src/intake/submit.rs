use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::form::IntakeSubmission;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("failed to encode intake submission: {0}")]
    Encode(String),
    #[error("form endpoint unreachable: {0}")]
    Network(String),
    #[error("form endpoint responded with status {0}")]
    Status(u16),
}

/// Posts the intake as JSON. Anything but a 2xx answer is a failure.
pub async fn submit_intake(endpoint: &str, submission: &IntakeSubmission) -> Result<(), SubmitError> {
    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    info!("Intake submitted for {}", submission.company);
    Ok(())
}
