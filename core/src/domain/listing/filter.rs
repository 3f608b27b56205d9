use std::fmt;

/// A value bound to a `?` placeholder of a [`FilterClause`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParam {
    Int(i64),
    Text(String),
}

impl fmt::Display for FilterParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterParam::Int(value) => write!(f, "{value}"),
            FilterParam::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Predicate fragments joined with `AND`, plus their bound parameters in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterClause {
    fragments: Vec<String>,
    params: Vec<FilterParam>,
}

impl FilterClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment together with the parameters for its placeholders.
    fn push(&mut self, fragment: String, params: impl IntoIterator<Item = FilterParam>) {
        self.fragments.push(fragment);
        self.params.extend(params);
        debug_assert_eq!(self.placeholder_count(), self.params.len());
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn params(&self) -> &[FilterParam] {
        &self.params
    }

    /// `WHERE a AND b`, or an empty string when nothing filters.
    pub fn where_sql(&self) -> String {
        if self.fragments.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.fragments.join(" AND "))
        }
    }

    pub fn placeholder_count(&self) -> usize {
        self.fragments
            .iter()
            .map(|fragment| fragment.matches('?').count())
            .sum()
    }
}

/// Describes which columns of a collection can be filtered and searched.
#[derive(Debug, Clone, Copy)]
pub struct FilterBuilder {
    /// Column compared for equality against the foreign-key filter.
    pub filter_column: &'static str,
    /// Text columns matched by the free-text search.
    pub search_columns: &'static [&'static str],
}

impl FilterBuilder {
    pub const fn new(filter_column: &'static str, search_columns: &'static [&'static str]) -> Self {
        Self {
            filter_column,
            search_columns,
        }
    }

    pub fn build(&self, filter_id: Option<i64>, search: Option<&str>) -> FilterClause {
        let mut clause = FilterClause::new();

        if let Some(id) = filter_id
            && id != 0
        {
            clause.push(
                format!("{} = ?", self.filter_column),
                [FilterParam::Int(id)],
            );
        }

        if let Some(text) = search.map(str::trim)
            && !text.is_empty()
            && !self.search_columns.is_empty()
        {
            let pattern = format!("%{text}%");
            let matches = self
                .search_columns
                .iter()
                .map(|column| format!("LOWER({column}) LIKE LOWER(?)"))
                .collect::<Vec<_>>()
                .join(" OR ");

            clause.push(
                format!("({matches})"),
                self.search_columns
                    .iter()
                    .map(|_| FilterParam::Text(pattern.clone())),
            );
        }

        clause
    }
}
