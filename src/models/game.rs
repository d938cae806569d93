use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A board game from the catalog. All fields are read-only from this
/// system's perspective; most are carried opaquely from the upstream dump.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub gid: i32,
    pub name: String,
    /// Release year, where the dump has one
    pub year: Option<i32>,
    /// Rank in the upstream catalog
    pub rank: Option<i32>,
    pub users_rated: Option<i32>,
    /// Upstream catalog page for the game
    pub url: Option<String>,
    /// Box art URI
    pub image: Option<String>,
}

/// The slim projection returned by a name search.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameSummary {
    pub gid: i32,
    pub name: String,
    pub image: Option<String>,
}

/// One search result in the JSON representation: the summary plus a
/// hyperlink to the game's detail resource.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub game: GameSummary,
    pub url: String,
}

impl From<GameSummary> for SearchHit {
    fn from(game: GameSummary) -> Self {
        let url = super::game_link(game.gid);
        SearchHit { game, url }
    }
}

/// Paginated comment references embedded in a game's JSON representation.
/// JSON clients dereference the links themselves instead of getting
/// inlined comment bodies.
#[derive(Debug, Serialize)]
pub struct CommentLinks {
    pub count: i64,
    pub offset: i64,
    pub list: Vec<String>,
}

/// JSON representation of a game detail resource.
#[derive(Debug, Serialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub game: Game,
    pub comments: CommentLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> GameSummary {
        GameSummary {
            gid: 174430,
            name: "Gloomhaven".to_string(),
            image: Some("https://example.com/gloomhaven.jpg".to_string()),
        }
    }

    #[test]
    fn test_search_hit_link() {
        let hit = SearchHit::from(summary());
        assert_eq!(hit.url, "/game/174430");
    }

    #[test]
    fn test_search_hit_flattens_summary() {
        let json = serde_json::to_value(SearchHit::from(summary())).unwrap();
        assert_eq!(json["gid"], 174430);
        assert_eq!(json["name"], "Gloomhaven");
        assert_eq!(json["url"], "/game/174430");
    }

    #[test]
    fn test_game_detail_links_comments() {
        let detail = GameDetail {
            game: Game {
                gid: 42,
                name: "Twilight Struggle".to_string(),
                year: Some(2005),
                rank: Some(3),
                users_rated: None,
                url: None,
                image: None,
            },
            comments: CommentLinks {
                count: 7,
                offset: 0,
                list: (1..=5).map(super::super::comment_link).collect(),
            },
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["gid"], 42);
        assert_eq!(json["name"], "Twilight Struggle");
        assert_eq!(json["comments"]["count"], 7);
        assert_eq!(json["comments"]["offset"], 0);
        assert_eq!(json["comments"]["list"].as_array().unwrap().len(), 5);
        assert_eq!(json["comments"]["list"][0], "/comment/1");
        assert_eq!(json["comments"]["list"][4], "/comment/5");
    }
}
