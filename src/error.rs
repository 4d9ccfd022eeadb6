use thiserror::Error;

// Every failure in the generation path collapses into one of these kinds;
// the flow layer turns any of them into the fallback line and exit code 1.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("no API key configured (set GEMINI_API_KEY or GOOGLE_API_KEY)")]
    MissingCredential, // Credential resolution came up empty at startup.

    #[error("unknown request type: {0}")]
    UnknownRequestType(String), // Tag outside the ten recognized values.

    #[error("generation request failed: {0}")]
    Service(String), // Network, status, or malformed-body failures.

    #[error("generation returned no usable text")]
    EmptyResponse, // Call succeeded but the text was blank after trimming.
}

impl NarrativeError {
    // Empty answers fall back quietly; every other kind earns a stderr line.
    pub fn is_silent(&self) -> bool {
        matches!(self, NarrativeError::EmptyResponse)
    }
}

impl From<reqwest::Error> for NarrativeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter; strip it
        // before the message can reach stderr or the log file.
        NarrativeError::Service(err.without_url().to_string())
    }
}
