mod comment;
mod game;
mod search;

use axum::{response::Html, routing::get, Router};

use crate::{views, AppState};

/// Build the content router. Every route is GET; anything not matched
/// here falls through to the static asset service.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/search", get(search::search))
        .route("/game/{gid}", get(game::get_game))
        .route("/comment/{c_id}", get(comment::get_comment))
}

/// Landing page with the search form
async fn index() -> Html<String> {
    Html(views::index_page())
}
