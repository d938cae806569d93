use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user comment on a game. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub c_id: i32,
    /// Game this comment belongs to
    pub gid: i32,
    pub user: Option<String>,
    pub rating: Option<f64>,
    pub c_text: Option<String>,
}

/// JSON representation of a comment detail resource: the comment plus a
/// hyperlink to its game instead of an inlined game object.
#[derive(Debug, Serialize)]
pub struct CommentDetail {
    #[serde(flatten)]
    pub comment: Comment,
    pub game: String,
}

impl From<Comment> for CommentDetail {
    fn from(comment: Comment) -> Self {
        let game = super::game_link(comment.gid);
        CommentDetail { comment, game }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_detail_links_game() {
        let comment = Comment {
            c_id: 123,
            gid: 42,
            user: Some("meeple_fan".to_string()),
            rating: Some(8.5),
            c_text: Some("Great game".to_string()),
        };

        let detail = CommentDetail::from(comment);
        assert_eq!(detail.game, "/game/42");

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["c_id"], 123);
        assert_eq!(json["game"], "/game/42");
    }
}
