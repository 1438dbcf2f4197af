use clap::Parser;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001/tasks";

/// Scrape tasks from a web page and send them to the backend.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to scrape tasks from
    pub scrape_url: String,

    /// Backend API endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,
}
