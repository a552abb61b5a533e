// SPDX-License-Identifier: Apache-2.0

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Listing parameters after default/clamp normalization.
///
/// `page` is at least 1 and `limit` sits in `[1, MAX_LIMIT]`; non-numeric or
/// zero raw inputs fall back to the defaults before clamping. An empty `q`
/// means no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub q: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            q: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    #[must_use]
    pub fn normalized(q: Option<String>, raw_page: Option<&str>, raw_limit: Option<&str>) -> Self {
        Self {
            q: q.filter(|s| !s.is_empty()),
            page: normalize(raw_page, DEFAULT_PAGE, u32::MAX),
            limit: normalize(raw_limit, DEFAULT_LIMIT, MAX_LIMIT),
        }
    }
}

fn normalize(raw: Option<&str>, default: u32, max: u32) -> u32 {
    match raw.and_then(parse_leading_int) {
        // Zero falls back to the default rather than clamping to 1.
        None | Some(0) => default,
        Some(n) if n < 1 => 1,
        Some(n) => u32::try_from(n).unwrap_or(max).min(max),
    }
}

// Reads the leading integer and ignores the rest, so "12.5" is 12 and
// "7abc" is 7.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -parsed } else { parsed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> ListParams {
        ListParams::normalized(None, page, limit)
    }

    #[test]
    fn absent_inputs_take_defaults() {
        let p = params(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 20);
    }

    #[test]
    fn non_numeric_inputs_take_defaults() {
        let p = params(Some("abc"), Some(".5"));
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 20);
    }

    #[test]
    fn decimal_inputs_keep_their_leading_integer() {
        let p = params(Some("2.9"), Some("12.5"));
        assert_eq!(p.page, 2);
        assert_eq!(p.limit, 12);
    }

    #[test]
    fn zero_inputs_take_defaults() {
        let p = params(Some("0"), Some("0"));
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 20);
    }

    #[test]
    fn negative_inputs_clamp_to_one() {
        let p = params(Some("-5"), Some("-5"));
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 1);
    }

    #[test]
    fn limit_clamps_to_max() {
        assert_eq!(params(None, Some("500")).limit, MAX_LIMIT);
        assert_eq!(params(None, Some("100")).limit, 100);
    }

    #[test]
    fn empty_query_string_means_no_filter() {
        let p = ListParams::normalized(Some(String::new()), None, None);
        assert_eq!(p.q, None);
    }
}
