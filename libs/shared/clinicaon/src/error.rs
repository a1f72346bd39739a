use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicaOnError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("No valid authentication token")]
    Unauthenticated,

    #[error("ClinicaOn API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ClinicaOnError {
    fn from(err: reqwest::Error) -> Self {
        ClinicaOnError::Network(err.to_string())
    }
}
