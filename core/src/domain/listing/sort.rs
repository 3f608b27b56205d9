use std::fmt;

use serde::{Serialize, Serializer};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Anything other than a case-insensitive "asc" sorts descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A closed set of client-facing sort keys.
///
/// Every key maps to a column expression known at compile time, so the text that ends
/// up after `ORDER BY` can never come from the request.
pub trait SortKey: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];
    const DEFAULT: Self;

    /// Key as exposed to clients (`sortBy`).
    fn key(self) -> &'static str;

    /// Trusted SQL expression used in `ORDER BY`.
    fn expression(self) -> &'static str;

    fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.key().eq_ignore_ascii_case(raw))
    }
}

/// Resolved sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K: SortKey> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> Sort<K> {
    /// Unknown or missing keys fall back to `K::DEFAULT` instead of failing.
    pub fn resolve(key_raw: Option<&str>, direction_raw: Option<&str>) -> Self {
        let key = key_raw.and_then(K::from_key).unwrap_or(K::DEFAULT);

        Self {
            key,
            direction: SortDirection::parse(direction_raw),
        }
    }

    pub fn expression(&self) -> &'static str {
        self.key.expression()
    }

    pub fn order_by_sql(&self) -> String {
        format!("ORDER BY {} {}", self.key.expression(), self.direction.as_sql())
    }
}

impl<K: SortKey> Default for Sort<K> {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
