use crate::error::AppError;
use crate::http;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

/// Fetch the source page and collect one task description per list item,
/// in document order.
pub fn scrape_tasks(url: &str) -> Result<Vec<String>, AppError> {
    let client = http::client()?;
    let body = fetch_document(&client, url)?;
    extract_tasks(&body)
}

pub fn fetch_document(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .send()
        .map_err(|err| AppError::http(err.to_string()))?;

    let response = response
        .error_for_status()
        .map_err(|err| AppError::http(err.to_string()))?;

    response.text().map_err(|err| AppError::http(err.to_string()))
}

/// Trimmed text content of every `li` element in the document. Empty and
/// duplicate strings are kept and forwarded as-is.
pub fn extract_tasks(html: &str) -> Result<Vec<String>, AppError> {
    let selector =
        Selector::parse("li").map_err(|err| AppError::invalid_data(err.to_string()))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|item| item.text().collect::<String>().trim().to_string())
        .collect())
}
