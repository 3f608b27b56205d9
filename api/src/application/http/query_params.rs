use std::collections::HashMap;

use registrar_core::domain::listing::ListParams;

/// Reads the listing parameters out of a decoded query string.
///
/// `filter_keys` are tried in order and the first present one wins, so a collection can
/// accept a specific name such as `subjectId` alongside the generic `filterId`.
pub fn list_params_from_query_map(
    query_map: &HashMap<String, String>,
    filter_keys: &[&str],
) -> ListParams {
    let get = |key: &str| query_map.get(key).cloned();

    ListParams {
        page: get("page"),
        limit: get("limit"),
        sort_by: get("sortBy"),
        sort_dir: get("sortDir"),
        q: get("q"),
        filter_id: filter_keys.iter().find_map(|key| get(key)),
    }
}
