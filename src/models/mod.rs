mod comment;
mod game;

pub use comment::{Comment, CommentDetail};
pub use game::{CommentLinks, Game, GameDetail, GameSummary, SearchHit};

/// Hyperlink to a game's detail resource.
pub fn game_link(gid: i32) -> String {
    format!("/game/{}", gid)
}

/// Hyperlink to a comment's detail resource.
pub fn comment_link(c_id: i32) -> String {
    format!("/comment/{}", c_id)
}
