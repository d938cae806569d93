//! HTML rendering. Handlers pass plain view-model structs in and get
//! markup back; nothing in here touches the database or the request.

use crate::models::{Comment, Game, GameSummary};
use crate::pagination::PaginationWindow;

/// View-model for the search results page.
pub struct SearchPage<'a> {
    /// The fragment the user searched for, echoed back into the form
    pub query: &'a str,
    pub has_results: bool,
    pub games: &'a [GameSummary],
}

/// View-model for the game detail page. The pagination window is
/// flattened into top-level fields the template reads directly.
pub struct GamePage<'a> {
    pub game: &'a Game,
    pub comments: &'a [Comment],
    pub first_comment: i64,
    pub last_comment: i64,
    pub total_count: i64,
    pub has_previous: bool,
    pub previous_offset: i64,
    pub has_next: bool,
    pub next_offset: i64,
}

impl<'a> GamePage<'a> {
    pub fn new(game: &'a Game, comments: &'a [Comment], window: &PaginationWindow) -> Self {
        GamePage {
            game,
            comments,
            first_comment: window.first_index,
            last_comment: window.last_index,
            total_count: window.total,
            has_previous: window.has_previous,
            previous_offset: window.previous_offset,
            has_next: window.has_next,
            next_offset: window.next_offset,
        }
    }
}

/// Escape text for interpolation into HTML body or attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        body
    )
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form action="/search" method="get">
<input type="text" name="name" value="{}" placeholder="Game name">
<button type="submit">Search</button>
</form>"#,
        escape(query)
    )
}

/// Landing page: just the query form.
pub fn index_page() -> String {
    let body = format!("<h1>Board Game Catalog</h1>\n{}", search_form(""));
    layout("Board Game Catalog", &body)
}

pub fn search_page(page: &SearchPage) -> String {
    let mut body = format!("<h1>Search</h1>\n{}\n", search_form(page.query));

    if page.has_results {
        body.push_str("<ul class=\"games\">\n");
        for game in page.games {
            body.push_str(&format!(
                "<li><a href=\"/game/{}\">{}</a></li>\n",
                game.gid,
                escape(&game.name)
            ));
        }
        body.push_str("</ul>\n");
    } else {
        body.push_str("<p>No games found.</p>\n");
    }

    layout("Search", &body)
}

pub fn game_page(page: &GamePage) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(&page.game.name));

    if let Some(image) = &page.game.image {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image),
            escape(&page.game.name)
        ));
    }
    if let Some(year) = page.game.year {
        body.push_str(&format!("<p>Released: {}</p>\n", year));
    }
    if let Some(rank) = page.game.rank {
        body.push_str(&format!("<p>Rank: {}</p>\n", rank));
    }

    body.push_str(&format!(
        "<h2>Comments {} \u{2013} {} of {}</h2>\n",
        page.first_comment, page.last_comment, page.total_count
    ));

    body.push_str("<ul class=\"comments\">\n");
    for comment in page.comments {
        body.push_str(&format!("<li>{}</li>\n", comment_fragment(comment)));
    }
    body.push_str("</ul>\n");

    body.push_str("<nav>\n");
    if page.has_previous {
        body.push_str(&format!(
            "<a href=\"/game/{}?offset={}\">Previous</a>\n",
            page.game.gid, page.previous_offset
        ));
    }
    if page.has_next {
        body.push_str(&format!(
            "<a href=\"/game/{}?offset={}\">Next</a>\n",
            page.game.gid, page.next_offset
        ));
    }
    body.push_str("</nav>\n");

    layout(&page.game.name, &body)
}

/// Markup for a single comment, used inline on the game page and as the
/// whole body of the comment detail response.
pub fn comment_fragment(comment: &Comment) -> String {
    let user = comment.user.as_deref().unwrap_or("anonymous");
    let rating = comment
        .rating
        .map(|r| format!(" rated {}", r))
        .unwrap_or_default();
    let text = comment.c_text.as_deref().unwrap_or("");

    format!(
        "<div class=\"comment\"><strong>{}</strong>{}<p>{}</p></div>",
        escape(user),
        rating,
        escape(text)
    )
}

pub fn comment_page(comment: &Comment) -> String {
    layout("Comment", &comment_fragment(comment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::window;

    fn game() -> Game {
        Game {
            gid: 42,
            name: "Twilight <Struggle>".to_string(),
            year: Some(2005),
            rank: Some(3),
            users_rated: Some(40000),
            url: None,
            image: None,
        }
    }

    fn comment(c_id: i32) -> Comment {
        Comment {
            c_id,
            gid: 42,
            user: Some("alice".to_string()),
            rating: Some(9.0),
            c_text: Some("tense & brilliant".to_string()),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_search_page_links_games() {
        let games = vec![GameSummary {
            gid: 13,
            name: "Catan".to_string(),
            image: None,
        }];
        let html = search_page(&SearchPage {
            query: "cata",
            has_results: true,
            games: &games,
        });
        assert!(html.contains("<a href=\"/game/13\">Catan</a>"));
        assert!(html.contains("value=\"cata\""));
    }

    #[test]
    fn test_search_page_empty() {
        let html = search_page(&SearchPage {
            query: "zzz",
            has_results: false,
            games: &[],
        });
        assert!(html.contains("No games found"));
    }

    #[test]
    fn test_game_page_escapes_name_and_paginates() {
        let g = game();
        let comments = vec![comment(1), comment(2)];
        let w = window(5, 5, 7);
        let html = game_page(&GamePage::new(&g, &comments, &w));

        assert!(html.contains("Twilight &lt;Struggle&gt;"));
        assert!(html.contains("Comments 6 \u{2013} 7 of 7"));
        assert!(html.contains("href=\"/game/42?offset=0\""));
        assert!(!html.contains(">Next<"));
    }

    #[test]
    fn test_game_page_next_link_on_first_page() {
        let g = game();
        let comments: Vec<Comment> = (1..=5).map(comment).collect();
        let w = window(0, 5, 7);
        let html = game_page(&GamePage::new(&g, &comments, &w));

        assert!(html.contains("href=\"/game/42?offset=5\""));
        assert!(!html.contains(">Previous<"));
    }

    #[test]
    fn test_comment_fragment_escapes_text() {
        let html = comment_fragment(&comment(1));
        assert!(html.contains("tense &amp; brilliant"));
        assert!(html.contains("alice"));
    }
}
