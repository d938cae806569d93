use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Result,
    models::SearchHit,
    negotiate::{negotiate, Representation},
    views::{self, SearchPage},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Name fragment to match; empty matches every game
    #[serde(default)]
    name: String,
}

/// Search games by name fragment. No pagination.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    let representation = negotiate(&headers)?;

    let games = state.db.search_games(&query.name).await?;

    Ok(match representation {
        Representation::Html => Html(views::search_page(&SearchPage {
            query: &query.name,
            has_results: !games.is_empty(),
            games: &games,
        }))
        .into_response(),
        Representation::Json => {
            let hits: Vec<SearchHit> = games.into_iter().map(SearchHit::from).collect();
            Json(hits).into_response()
        }
    })
}
