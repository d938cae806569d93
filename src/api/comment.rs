use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::{
    error::Result,
    models::CommentDetail,
    negotiate::{negotiate, Representation},
    views, AppState,
};

/// Single comment detail.
pub async fn get_comment(
    State(state): State<AppState>,
    Path(c_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response> {
    let representation = negotiate(&headers)?;

    let comment = state.db.get_comment(c_id).await?;

    Ok(match representation {
        Representation::Html => Html(views::comment_page(&comment)).into_response(),
        Representation::Json => Json(CommentDetail::from(comment)).into_response(),
    })
}
