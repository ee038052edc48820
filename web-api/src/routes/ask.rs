use crate::{Database, response::Response};
use actix_web::web;
use golden_core::answer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Default, Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AskBody {
    /// Free-text question, a missing question is answered as an empty one.
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
}

/// Answers a free-text question about a vessel.
#[utoipa::path(
    post,
    path = "/ask",
    request_body = AskBody,
    responses(
        (status = 200, description = "the answer to the question", body = AskResponse),
        (status = 400, description = "the body was not valid json", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(db))]
pub async fn ask<T: Database + Send + Sync + 'static>(
    db: web::Data<T>,
    body: web::Json<AskBody>,
) -> Response<AskResponse> {
    let question = body.into_inner().question.unwrap_or_default();

    Response::new(AskResponse {
        answer: answer(db.get_ref(), &question),
    })
}
