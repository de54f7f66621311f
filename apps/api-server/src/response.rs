//! Response writer - every request ends in exactly one of these.

use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;

use crate::middleware::error::{AppError, AppResult};

/// Build a response with the given status, headers and optional body.
pub fn send_response(status: StatusCode, headers: &[(&str, &str)], body: Option<String>) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    for &(name, value) in headers {
        builder.insert_header((name, value));
    }

    match body {
        Some(body) => builder.body(body),
        None => builder.finish(),
    }
}

/// 200 response with `body` serialized as JSON.
pub fn send_json<T: Serialize>(body: &T) -> AppResult<HttpResponse> {
    let body = serde_json::to_string(body).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(send_response(
        StatusCode::OK,
        &[("Content-Type", "application/json")],
        Some(body),
    ))
}
