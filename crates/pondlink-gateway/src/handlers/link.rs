use crate::error::{AppError, Result};
use crate::model::{InsertRequest, InsertResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Parses the body as JSON whatever the declared content type, like the
/// submission page expects.
pub async fn insert_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InsertResponse>> {
    let request: InsertRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;
    let link = request.link.ok_or(AppError::MissingLink)?;

    let token = state.shortener().submit(&link)?;

    Ok(Json(InsertResponse {
        short_link: token.to_url(state.base_url()),
    }))
}

pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let link = state.shortener().resolve(&token)?;
    let target = redirect_target(&link);
    let location =
        HeaderValue::try_from(target.as_str()).map_err(|_| AppError::InvalidRedirect(link))?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Links may be stored without a scheme; a bare `Location` would resolve
/// relative to this server.
fn redirect_target(link: &str) -> String {
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_keeps_explicit_schemes() {
        assert_eq!(redirect_target("http://a.com/x"), "http://a.com/x");
        assert_eq!(redirect_target("HTTPS://a.com"), "HTTPS://a.com");
    }

    #[test]
    fn redirect_target_defaults_to_https() {
        assert_eq!(redirect_target("a.com/x"), "https://a.com/x");
    }
}
