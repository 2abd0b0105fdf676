use serde::{Deserialize, Serialize};

/// A catalog entry as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}
