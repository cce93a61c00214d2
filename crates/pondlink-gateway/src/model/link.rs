use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct InsertRequest {
    /// `None` when the field is missing, so that case gets its own response.
    pub link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub short_link: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
