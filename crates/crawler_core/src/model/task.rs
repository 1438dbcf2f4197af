use serde::{Deserialize, Serialize};

/// Payload posted to the backend for one scraped task. The backend assigns
/// the id; the crawler only ever supplies the description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub description: String,
}

impl NewTask {
    pub fn new<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
        }
    }
}
