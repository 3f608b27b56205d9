//! Filtered, sorted, paginated collection queries.
//!
//! Raw query-string values enter through [`ListParams`] and are turned into a typed
//! [`ListQuery`] before anything touches SQL. The pieces are independent:
//! [`pagination`] bounds the window, [`sort`] maps client keys to trusted expressions and
//! [`filter`] builds the `WHERE` clause with its bound parameters.

use serde::{Serialize, Serializer, ser::SerializeMap};

pub mod filter;
pub mod pagination;
pub mod sort;

use filter::{FilterBuilder, FilterClause};
use pagination::PageWindow;
use sort::{Sort, SortDirection, SortKey};

/// Listing parameters exactly as received from the client.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub q: Option<String>,
    pub filter_id: Option<String>,
}

/// Validated listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<K: SortKey> {
    pub window: PageWindow,
    pub sort: Sort<K>,
    pub search: Option<String>,
    pub filter_id: Option<i64>,
}

impl<K: SortKey> ListQuery<K> {
    pub fn parse(params: &ListParams) -> Self {
        let search = params
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        // A filter that is not a non-zero integer is ignored rather than rejected.
        let filter_id = params
            .filter_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id != 0);

        Self {
            window: PageWindow::normalize(params.page.as_deref(), params.limit.as_deref()),
            sort: Sort::resolve(params.sort_by.as_deref(), params.sort_dir.as_deref()),
            search,
            filter_id,
        }
    }

    pub fn filter_clause(&self, builder: &FilterBuilder) -> FilterClause {
        builder.build(self.filter_id, self.search.as_deref())
    }
}

impl<K: SortKey> Default for ListQuery<K> {
    fn default() -> Self {
        Self::parse(&ListParams::default())
    }
}

/// Filter value echoed back in [`PageMeta`] under the collection's parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoedFilter {
    pub name: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub sort_by: &'static str,
    pub sort_dir: SortDirection,
    pub q: Option<String>,
    pub filter: Option<EchoedFilter>,
}

impl PageMeta {
    pub fn new<K: SortKey>(query: &ListQuery<K>, total: u64, filter_name: &'static str) -> Self {
        Self {
            page: query.window.page,
            limit: query.window.limit,
            total,
            total_pages: query.window.total_pages(total),
            sort_by: query.sort.key.key(),
            sort_dir: query.sort.direction,
            q: query.search.clone(),
            filter: query.filter_id.map(|value| EchoedFilter {
                name: filter_name,
                value,
            }),
        }
    }
}

impl Serialize for PageMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("limit", &self.limit)?;
        map.serialize_entry("total", &self.total)?;
        map.serialize_entry("totalPages", &self.total_pages)?;
        map.serialize_entry("sortBy", self.sort_by)?;
        map.serialize_entry("sortDir", &self.sort_dir)?;
        if let Some(q) = &self.q {
            map.serialize_entry("q", q)?;
        }
        if let Some(filter) = &self.filter {
            map.serialize_entry(filter.name, &filter.value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionResult<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> CollectionResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CollectionResult<U> {
        CollectionResult {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NoteSort {
        Id,
        Body,
    }

    impl SortKey for NoteSort {
        const ALL: &'static [Self] = &[NoteSort::Id, NoteSort::Body];
        const DEFAULT: Self = NoteSort::Id;

        fn key(self) -> &'static str {
            match self {
                NoteSort::Id => "id",
                NoteSort::Body => "body",
            }
        }

        fn expression(self) -> &'static str {
            match self {
                NoteSort::Id => "n.id",
                NoteSort::Body => "n.body",
            }
        }
    }

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => params.page = value,
                "limit" => params.limit = value,
                "sortBy" => params.sort_by = value,
                "sortDir" => params.sort_dir = value,
                "q" => params.q = value,
                "filterId" => params.filter_id = value,
                _ => unreachable!("unknown key {key}"),
            }
        }
        params
    }

    #[test]
    fn test_parse_defaults() {
        let query = ListQuery::<NoteSort>::parse(&ListParams::default());
        assert_eq!(query.window, PageWindow { page: 1, limit: 10, offset: 0 });
        assert_eq!(query.sort.key, NoteSort::Id);
        assert_eq!(query.sort.direction, SortDirection::Desc);
        assert_eq!(query.search, None);
        assert_eq!(query.filter_id, None);
    }

    #[test]
    fn test_parse_trims_search_and_coerces_filter() {
        let query = ListQuery::<NoteSort>::parse(&params(&[("q", "  hello "), ("filterId", "3")]));
        assert_eq!(query.search.as_deref(), Some("hello"));
        assert_eq!(query.filter_id, Some(3));

        let query = ListQuery::<NoteSort>::parse(&params(&[("q", "   "), ("filterId", "abc")]));
        assert_eq!(query.search, None);
        assert_eq!(query.filter_id, None);

        let query = ListQuery::<NoteSort>::parse(&params(&[("filterId", "0")]));
        assert_eq!(query.filter_id, None);
    }

    #[test]
    fn test_meta_serialization_echoes_filters() {
        let query = ListQuery::<NoteSort>::parse(&params(&[
            ("page", "2"),
            ("limit", "2"),
            ("sortBy", "BODY"),
            ("sortDir", "ASC"),
            ("q", "x"),
            ("filterId", "7"),
        ]));
        let meta = PageMeta::new(&query, 5, "authorId");

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 2,
                "limit": 2,
                "total": 5,
                "totalPages": 3,
                "sortBy": "body",
                "sortDir": "asc",
                "q": "x",
                "authorId": 7,
            })
        );
    }

    #[test]
    fn test_meta_omits_absent_filters() {
        let query = ListQuery::<NoteSort>::default();
        let json = serde_json::to_value(PageMeta::new(&query, 0, "authorId")).unwrap();

        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["sortDir"], "desc");
        assert!(json.get("q").is_none());
        assert!(json.get("authorId").is_none());
    }
}
