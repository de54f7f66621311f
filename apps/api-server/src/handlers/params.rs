//! Query-string parameters and their validation.

use actix_web::web;

use crate::middleware::error::{AppError, AppResult};

/// Decoded query-string pairs, in request order.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: &str) -> AppResult<Self> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .into_inner();

        Ok(Self { pairs })
    }

    /// First value for `name`; a bare `?name` yields an empty string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn required(&self, name: &str) -> AppResult<&str> {
        self.get(name)
            .ok_or_else(|| AppError::BadRequest(format!("missing `{name}` parameter")))
    }

    /// The `id` parameter as a base-10 integer.
    pub fn id(&self) -> AppResult<i64> {
        let raw = self.required("id")?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("`id` is not a number: {raw:?}")))
    }

    /// The `content` parameter. Empty content is accepted.
    pub fn content(&self) -> AppResult<&str> {
        self.required("content")
    }
}
