use crate::error::{AppError, Result};
use crate::models::{Game, GameSummary};

impl super::Database {
    /// Find games whose name contains the given fragment, case-insensitive.
    /// An empty fragment matches everything.
    pub async fn search_games(&self, fragment: &str) -> Result<Vec<GameSummary>> {
        let pattern = format!("%{}%", fragment);

        let games = sqlx::query_as::<_, GameSummary>(
            "SELECT gid, name, image FROM game WHERE name ILIKE $1 ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(games)
    }

    /// Get a game by ID
    pub async fn get_game(&self, gid: i32) -> Result<Game> {
        sqlx::query_as::<_, Game>("SELECT * FROM game WHERE gid = $1")
            .bind(gid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", gid)))
    }
}
