use serde::Serialize;

/// One page's worth of display indices and navigation flags, derived from
/// an offset into an ordered result of `total` rows. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    pub offset: i64,
    pub page_size: i64,
    pub total: i64,
    /// 1-based index of the first row on this page, 0 when there are no rows
    pub first_index: i64,
    /// 1-based index of the last row on this page, capped at `total`
    pub last_index: i64,
    pub has_previous: bool,
    pub previous_offset: i64,
    pub has_next: bool,
    pub next_offset: i64,
}

/// Compute the display window for one page. Pure arithmetic, no I/O.
///
/// Callers are expected to have clamped `offset` to >= 0 already;
/// `page_size` must be positive.
pub fn window(offset: i64, page_size: i64, total: i64) -> PaginationWindow {
    let first_index = if total == 0 { 0 } else { offset + 1 };
    let last_index = (offset + page_size).min(total);

    PaginationWindow {
        offset,
        page_size,
        total,
        first_index,
        last_index,
        has_previous: offset > 0,
        previous_offset: (offset - page_size).max(0),
        has_next: offset + page_size < total,
        next_offset: offset + page_size,
    }
}
