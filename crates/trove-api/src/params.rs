// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use trove_query::ListParams;

/// Parses `q`/`page`/`limit` from the raw query map. Never fails: invalid
/// values fall back to the defaults and are then clamped.
#[must_use]
pub fn parse_list_params(query: &HashMap<String, String>) -> ListParams {
    ListParams::normalized(
        query.get("q").cloned(),
        query.get("page").map(String::as_str),
        query.get("limit").map(String::as_str),
    )
}
