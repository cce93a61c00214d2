mod link;

pub use link::{HealthResponse, InsertRequest, InsertResponse};
