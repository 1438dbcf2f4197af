use crate::error::AppError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Bound applied to every outbound request, on both the scrape and the
/// forward side.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn client() -> Result<Client, AppError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| AppError::http(err.to_string()))
}
