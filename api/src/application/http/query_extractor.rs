use std::{collections::HashMap, convert::Infallible, marker::PhantomData};

use axum::{extract::FromRequestParts, http::request::Parts};
use registrar_core::domain::listing::ListParams;

use super::query_params::list_params_from_query_map;

/// Query-string names a collection accepts for its equality filter.
pub trait FilterKeys: Send + Sync {
    const KEYS: &'static [&'static str];
}

/// Extracts [`ListParams`] from the query string.
///
/// Never rejects: an unparsable query string behaves like an empty one and the core
/// falls back to defaults for anything it cannot read.
///
/// ```rust,ignore
/// async fn handler(ListParamsExtractor(params, _): ListParamsExtractor<SubjectFilter>) {}
/// ```
#[derive(Debug, Clone)]
pub struct ListParamsExtractor<F: FilterKeys>(pub ListParams, pub PhantomData<F>);

impl<S, F> FromRequestParts<S> for ListParamsExtractor<F>
where
    S: Send + Sync,
    F: FilterKeys,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(ListParamsExtractor(
            list_params_from_query_map(&query_map, F::KEYS),
            PhantomData,
        ))
    }
}
