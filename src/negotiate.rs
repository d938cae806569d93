use axum::http::{header, HeaderMap};

use crate::error::{AppError, Result};

/// The two representations this server can produce. Selection is a closed
/// decision: anything else is a 406, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

/// Pick a representation from the request's `Accept` header.
///
/// Quality weights are honored (default 1.0, q=0 means the client refuses
/// that type); among equal weights the client's ordering wins. HTML is the
/// preferred type: a missing header or a `*/*` range selects it.
pub fn negotiate(headers: &HeaderMap) -> Result<Representation> {
    let accept = match headers.get(header::ACCEPT) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::NotAcceptable)?,
        None => return Ok(Representation::Html),
    };

    let mut best: Option<(Representation, f32)> = None;

    for range in accept.split(',') {
        let mut parts = range.split(';');
        let media_type = parts.next().unwrap_or("").trim();

        // Unknown and empty tokens contribute nothing
        let representation = match media_type {
            "text/html" | "text/*" | "*/*" => Representation::Html,
            "application/json" | "application/*" => Representation::Json,
            _ => continue,
        };

        let q = parts
            .filter_map(|p| {
                let p = p.trim();
                p.strip_prefix("q=").or_else(|| p.strip_prefix("Q="))
            })
            .next()
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if q <= 0.0 {
            continue;
        }

        // Strictly greater, so the client's ordering breaks ties
        if best.map_or(true, |(_, best_q)| q > best_q) {
            best = Some((representation, q));
        }
    }

    best.map(|(r, _)| r).ok_or(AppError::NotAcceptable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_accept_prefers_html() {
        assert_eq!(negotiate(&HeaderMap::new()).unwrap(), Representation::Html);
    }

    #[test]
    fn test_browser_accept_selects_html() {
        let headers =
            headers_with_accept("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Html);
    }

    #[test]
    fn test_json_client() {
        let headers = headers_with_accept("application/json");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Json);
    }

    #[test]
    fn test_wildcard_selects_preferred_type() {
        let headers = headers_with_accept("*/*");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Html);
    }

    #[test]
    fn test_client_order_wins() {
        let headers = headers_with_accept("application/json, text/html");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Json);
    }

    #[test]
    fn test_unsupported_type_is_not_acceptable() {
        let headers = headers_with_accept("application/xml");
        assert!(matches!(negotiate(&headers), Err(AppError::NotAcceptable)));
    }

    #[test]
    fn test_unknown_types_skipped_until_match() {
        let headers = headers_with_accept("image/png, application/json;q=0.5");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Json);
    }

    #[test]
    fn test_quality_weight_beats_ordering() {
        let headers = headers_with_accept("text/html;q=0.1, application/json");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Json);
    }

    #[test]
    fn test_quality_zero_refuses_type() {
        let headers = headers_with_accept("text/html;q=0, application/json;q=0.5");
        assert_eq!(negotiate(&headers).unwrap(), Representation::Json);

        let headers = headers_with_accept("text/html;q=0");
        assert!(matches!(negotiate(&headers), Err(AppError::NotAcceptable)));
    }

    #[test]
    fn test_trailing_empty_token_is_not_a_match() {
        let headers = headers_with_accept("application/xml,");
        assert!(matches!(negotiate(&headers), Err(AppError::NotAcceptable)));
    }
}
