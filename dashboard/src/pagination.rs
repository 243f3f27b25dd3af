use crate::model::PAGE_SIZE;

/// A resolved page of the history table.
#[derive(Debug, PartialEq, Eq)]
pub struct Page {
    /// Clamped 1-based page number.
    pub number: usize,
    /// `ceil(total_records / PAGE_SIZE)`; 0 when the history is empty.
    pub total_pages: usize,
    /// Half-open slice window into the newest-first history.
    pub start: usize,
    pub end: usize,
}

impl Page {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Resolve a requested page number against the history length.
///
/// Requests below 1 clamp to 1; requests past the last page clamp to the
/// last page. An empty history resolves to page 1 of 0 with an empty
/// window.
pub fn paginate(total_records: usize, requested: i64) -> Page {
    let total_pages = total_records.div_ceil(PAGE_SIZE);

    let mut number = if requested < 1 { 1 } else { requested as usize };
    if number > total_pages && total_pages > 0 {
        number = total_pages;
    }

    // number is unclamped when the history is empty, so the window math
    // must not overflow on absurd requests.
    let start = number
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .min(total_records);
    let end = (start + PAGE_SIZE).min(total_records);

    Page {
        number,
        total_pages,
        start,
        end,
    }
}
