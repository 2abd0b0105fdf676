use serde::{Deserialize, Serialize};

/// Body of `POST /api/courses`
#[derive(Debug, Clone, Serialize)]
pub struct NewCourse<'a> {
    pub title: &'a str,
}

/// Body the backend sends back when it rejects a request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
