pub mod error;
pub mod forward;
pub mod http;
pub mod model;
pub mod scrape;
