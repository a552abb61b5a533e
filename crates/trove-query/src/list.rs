// SPDX-License-Identifier: Apache-2.0

use crate::ListParams;
use trove_model::{Item, ItemPage};

/// Filters and paginates the full item set, preserving file order.
///
/// The filter is a case-insensitive substring match against the item name
/// (not tokenized). `total` counts matches before pagination.
#[must_use]
pub fn list_page(items: Vec<Item>, params: &ListParams) -> ItemPage {
    let filtered: Vec<Item> = match &params.q {
        Some(q) => {
            let needle = q.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => items,
    };

    let total = filtered.len() as u64;
    let limit = params.limit;
    let total_pages = (total as u32).div_ceil(limit);
    let start = (params.page as usize - 1).saturating_mul(limit as usize);

    let data: Vec<Item> = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    ItemPage {
        data,
        total,
        page: params.page,
        limit,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            category: String::new(),
            price: id as f64,
        }
    }

    fn catalog(n: u64) -> Vec<Item> {
        (1..=n).map(|i| item(i, &format!("item {i}"))).collect()
    }

    fn with(q: Option<&str>, page: u32, limit: u32) -> ListParams {
        ListParams {
            q: q.map(str::to_string),
            page,
            limit,
        }
    }

    #[test]
    fn page_length_matches_the_clamp_invariant() {
        for (total, page, limit) in [(45_u64, 1_u32, 20_u32), (45, 3, 20), (45, 4, 20), (3, 1, 20)]
        {
            let result = list_page(catalog(total), &with(None, page, limit));
            let expected = (total as i64 - i64::from(page - 1) * i64::from(limit))
                .clamp(0, i64::from(limit)) as usize;
            assert_eq!(result.data.len(), expected, "total={total} page={page}");
            assert_eq!(result.total, total);
        }
    }

    #[test]
    fn total_pages_is_the_ceiling() {
        assert_eq!(list_page(catalog(45), &with(None, 1, 20)).total_pages, 3);
        assert_eq!(list_page(catalog(40), &with(None, 1, 20)).total_pages, 2);
        assert_eq!(list_page(Vec::new(), &with(None, 1, 20)).total_pages, 0);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let result = list_page(catalog(5), &with(None, 99, 20));
        assert!(result.data.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.page, 99);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![item(1, "Laptop Pro"), item(2, "Desk"), item(3, "laptop bag")];
        let result = list_page(items, &with(Some("laptop"), 1, 20));
        assert_eq!(result.total, 2);
        assert_eq!(result.data[0].name, "Laptop Pro");
    }

    #[test]
    fn total_counts_matches_before_pagination() {
        let items: Vec<Item> = (1..=30).map(|i| item(i, "widget")).collect();
        let result = list_page(items, &with(Some("WIDGET"), 2, 10));
        assert_eq!(result.total, 30);
        assert_eq!(result.data.len(), 10);
        assert_eq!(result.data[0].id, 11);
    }

    #[test]
    fn file_order_is_preserved() {
        let items = vec![item(9, "c"), item(2, "a"), item(5, "b")];
        let result = list_page(items, &with(None, 1, 20));
        let ids: Vec<u64> = result.data.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }
}
