use std::marker::PhantomData;

use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement, Value};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{
        CollectionResult, ListQuery, PageMeta,
        filter::{FilterBuilder, FilterClause, FilterParam},
        sort::SortKey,
    },
};
use crate::infrastructure::db::bind_placeholders;

/// Static description of a listable collection: what to select, where from, and which
/// columns the filter and search act on.
///
/// The count and data statements share the same `FROM`/`WHERE` text and parameters; the
/// data statement appends `ORDER BY` plus `LIMIT ? OFFSET ?`.
#[derive(Debug)]
pub struct CollectionQuery<K: SortKey> {
    pub name: &'static str,
    pub projection: &'static str,
    pub source: &'static str,
    pub filters: FilterBuilder,
    /// Name under which the foreign-key filter is echoed in the page meta.
    pub filter_param: &'static str,
    _sort: PhantomData<K>,
}

impl<K: SortKey> CollectionQuery<K> {
    pub const fn new(
        name: &'static str,
        projection: &'static str,
        source: &'static str,
        filters: FilterBuilder,
        filter_param: &'static str,
    ) -> Self {
        Self {
            name,
            projection,
            source,
            filters,
            filter_param,
            _sort: PhantomData,
        }
    }

    pub fn count_statement(&self, backend: DbBackend, clause: &FilterClause) -> Statement {
        let sql = with_where(
            format!("SELECT COUNT(*) AS total FROM {}", self.source),
            clause,
        );

        Statement::from_sql_and_values(
            backend,
            bind_placeholders(&sql, backend),
            clause.params().iter().map(to_value),
        )
    }

    pub fn data_statement(
        &self,
        backend: DbBackend,
        clause: &FilterClause,
        query: &ListQuery<K>,
    ) -> Statement {
        let sql = format!(
            "{} {} LIMIT ? OFFSET ?",
            with_where(
                format!("SELECT {} FROM {}", self.projection, self.source),
                clause,
            ),
            query.sort.order_by_sql(),
        );

        let values = clause
            .params()
            .iter()
            .map(to_value)
            .chain([
                Value::from(i64::try_from(query.window.limit).unwrap_or(i64::MAX)),
                Value::from(i64::try_from(query.window.offset).unwrap_or(i64::MAX)),
            ]);

        Statement::from_sql_and_values(backend, bind_placeholders(&sql, backend), values)
    }

    /// Runs the count query and then the page query.
    ///
    /// Both run outside a transaction, so under concurrent writes `meta.total` may not
    /// agree with the rows returned.
    pub async fn execute<C, M>(
        &self,
        db: &C,
        query: &ListQuery<K>,
    ) -> Result<CollectionResult<M>, CoreError>
    where
        C: ConnectionTrait,
        M: FromQueryResult,
    {
        let backend = db.get_database_backend();
        let clause = query.filter_clause(&self.filters);

        let count_row = db
            .query_one(self.count_statement(backend, &clause))
            .await
            .map_err(|e| {
                error!("Failed to count {}: {}", self.name, e);
                self.failure()
            })?;

        let total = match count_row {
            Some(row) => row.try_get::<i64>("", "total").map_err(|e| {
                error!("Failed to decode {} count: {}", self.name, e);
                self.failure()
            })?,
            None => 0,
        };
        let total = u64::try_from(total).unwrap_or(0);

        let rows = db
            .query_all(self.data_statement(backend, &clause, query))
            .await
            .map_err(|e| {
                error!("Failed to fetch {} page: {}", self.name, e);
                self.failure()
            })?;

        let data = rows
            .iter()
            .map(|row| M::from_query_result(row, ""))
            .collect::<Result<Vec<M>, _>>()
            .map_err(|e| {
                error!("Failed to decode {} row: {}", self.name, e);
                self.failure()
            })?;

        debug!(
            collection = self.name,
            total,
            returned = data.len(),
            page = query.window.page,
            "listed collection"
        );

        Ok(CollectionResult {
            data,
            meta: PageMeta::new(query, total, self.filter_param),
        })
    }

    fn failure(&self) -> CoreError {
        CoreError::internal(format!("Failed to list {}", self.name))
    }
}

fn with_where(sql: String, clause: &FilterClause) -> String {
    if clause.is_empty() {
        sql
    } else {
        format!("{sql} {}", clause.where_sql())
    }
}

fn to_value(param: &FilterParam) -> Value {
    match param {
        FilterParam::Int(value) => Value::from(*value),
        FilterParam::Text(value) => Value::from(value.clone()),
    }
}
