use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Result,
    models::{comment_link, CommentLinks, GameDetail},
    negotiate::{negotiate, Representation},
    pagination,
    views::{self, GamePage},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct GameQuery {
    /// Raw offset string, decoded leniently by `decode_offset`
    offset: Option<String>,
}

/// Decode the `offset` query parameter. Absent, non-numeric, or negative
/// values mean the first page, never an error.
fn decode_offset(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|n| n.max(0))
        .unwrap_or(0)
}

/// Game detail with one page of comments.
pub async fn get_game(
    State(state): State<AppState>,
    Path(gid): Path<i32>,
    Query(query): Query<GameQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    let representation = negotiate(&headers)?;
    let offset = decode_offset(query.offset.as_deref());
    let page_size = state.config.pagination.page_size;

    // Fan out the three lookups; the first failure (including a missing
    // game) fails the whole resolution, never a partial render.
    let (game, comments, total) = tokio::try_join!(
        state.db.get_game(gid),
        state.db.comments_page(gid, page_size, offset),
        state.db.count_comments(gid),
    )?;

    let window = pagination::window(offset, page_size, total);

    Ok(match representation {
        Representation::Html => {
            Html(views::game_page(&GamePage::new(&game, &comments, &window))).into_response()
        }
        Representation::Json => Json(GameDetail {
            game,
            comments: CommentLinks {
                count: total,
                offset,
                list: comments.iter().map(|c| comment_link(c.c_id)).collect(),
            },
        })
        .into_response(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_offset_absent() {
        assert_eq!(decode_offset(None), 0);
    }

    #[test]
    fn test_decode_offset_numeric() {
        assert_eq!(decode_offset(Some("5")), 5);
        assert_eq!(decode_offset(Some(" 10 ")), 10);
    }

    #[test]
    fn test_decode_offset_garbage_clamps_to_zero() {
        assert_eq!(decode_offset(Some("abc")), 0);
        assert_eq!(decode_offset(Some("")), 0);
        assert_eq!(decode_offset(Some("3.5")), 0);
    }

    #[test]
    fn test_decode_offset_negative_clamps_to_zero() {
        assert_eq!(decode_offset(Some("-5")), 0);
    }
}
