use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Largest offset a store accepts as a signed 64-bit bind value.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Normalized pagination window for a single listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PageWindow {
    /// Builds a window from raw `page`/`limit` query values.
    ///
    /// Malformed input never fails: values are read up to their first non-digit, so
    /// `"2abc"` is page 2. Non-numeric or non-positive pages collapse to 1, the limit is
    /// clamped to `[1, MAX_LIMIT]` (defaulting to `DEFAULT_LIMIT`), and pages past the
    /// largest representable offset are pulled back to it.
    pub fn normalize(page_raw: Option<&str>, limit_raw: Option<&str>) -> Self {
        let limit = parse_or(limit_raw, DEFAULT_LIMIT as i64).clamp(1, MAX_LIMIT as i64) as u64;
        let last_page = MAX_OFFSET / limit + 1;
        let page = (parse_or(page_raw, DEFAULT_PAGE as i64).max(1) as u64).min(last_page);

        Self {
            page,
            limit,
            offset: (page - 1) * limit,
        }
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total_pages(total, self.limit)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

/// At least one page, even for an empty collection.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1)).max(1)
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_integer).unwrap_or(default)
}

/// Reads an optionally signed run of digits at the start of `raw`, ignoring whatever
/// follows. Saturates instead of overflowing.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
