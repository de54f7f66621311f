//! HTTP handlers and route configuration.
//!
//! Every operation is reached by its exact path with any HTTP verb. Each
//! request opens one storage session, runs its handler and closes the
//! session again before the response goes out.

mod params;
mod posts;


use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use social_core::ports::PostSession;

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::response::send_response;
use crate::state::AppState;

use params::QueryParams;

/// The fixed set of post operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    GetById,
    Create,
    Edit,
    Delete,
    Restore,
    Like,
    Dislike,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::List,
        Operation::GetById,
        Operation::Create,
        Operation::Edit,
        Operation::Delete,
        Operation::Restore,
        Operation::Like,
        Operation::Dislike,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Operation::List => "/posts.get",
            Operation::GetById => "/posts.getById",
            Operation::Create => "/posts.post",
            Operation::Edit => "/posts.edit",
            Operation::Delete => "/posts.delete",
            Operation::Restore => "/posts.restore",
            Operation::Like => "/posts.like",
            Operation::Dislike => "/posts.dislike",
        }
    }

    async fn run(self, session: &dyn PostSession, params: &QueryParams) -> AppResult<HttpResponse> {
        match self {
            Operation::List => posts::list(session).await,
            Operation::GetById => posts::get_by_id(session, params).await,
            Operation::Create => posts::create(session, params).await,
            Operation::Edit => posts::edit(session, params).await,
            Operation::Delete => posts::delete(session, params).await,
            Operation::Restore => posts::restore(session, params).await,
            Operation::Like => posts::like(session, params).await,
            Operation::Dislike => posts::dislike(session, params).await,
        }
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for op in Operation::ALL {
        cfg.route(
            op.path(),
            web::route().to(move |state: web::Data<AppState>, req: HttpRequest| {
                dispatch(op, state, req)
            }),
        );
    }
}

/// Fallback for every path outside the operation table.
pub async fn not_found() -> HttpResponse {
    send_response(StatusCode::NOT_FOUND, &[], None)
}

async fn dispatch(
    op: Operation,
    state: web::Data<AppState>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let request_id = RequestId::of(&req);
    let params = QueryParams::parse(req.query_string())?;

    let session = state.posts.session().await?;
    let result = op.run(session.as_ref(), &params).await;

    if let Err(e) = session.close().await {
        tracing::warn!(
            request_id = %request_id,
            error = %e,
            "Failed to close storage session"
        );
    }

    tracing::debug!(
        request_id = %request_id,
        operation = op.path(),
        ok = result.is_ok(),
        "Operation finished"
    );
    result
}
