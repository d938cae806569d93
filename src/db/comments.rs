use crate::error::{AppError, Result};
use crate::models::Comment;

impl super::Database {
    /// One page of a game's comments, in stable c_id order. `limit` comes
    /// from the configured page size so the query and the pagination
    /// window never disagree.
    pub async fn comments_page(&self, gid: i32, limit: i64, offset: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comment WHERE gid = $1 ORDER BY c_id LIMIT $2 OFFSET $3",
        )
        .bind(gid)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Total comment count for a game
    pub async fn count_comments(&self, gid: i32) -> Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM comment WHERE gid = $1")
                .bind(gid)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Get a comment by ID
    pub async fn get_comment(&self, c_id: i32) -> Result<Comment> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comment WHERE c_id = $1")
            .bind(c_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", c_id)))
    }
}
