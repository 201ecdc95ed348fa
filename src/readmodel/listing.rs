//! 列表分页、排序与筛选
//!
//! 页码从 1 开始。所有操作都在已拉取的快照上进行，不会访问上游。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::PaginationInfo;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// 按单一排序键稳定排序，相等元素保持原有顺序
pub fn sort_by_key<T, K, F>(items: &mut [T], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    match order {
        SortOrder::Asc => items.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Desc => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}

/// 单字段等值筛选；`None` 或空字符串表示不筛选
pub fn filter_eq<T, K, F>(items: Vec<T>, value: Option<&str>, key: F) -> Vec<T>
where
    K: ToString,
    F: Fn(&T) -> K,
{
    match value {
        None | Some("") => items,
        Some(expected) => items
            .into_iter()
            .filter(|item| key(item).to_string() == expected)
            .collect(),
    }
}

/// 可为空的外键字段转为筛选键，缺失时为空字符串
pub fn optional_key(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// 有状态的分页器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    total: usize,
    current: usize,
}

impl Pager {
    /// 创建分页器，`current` 会被限制在 `[1, total_pages]` 内
    pub fn new(page_size: usize, total: usize, current: usize) -> Self {
        let mut pager = Self {
            page_size: page_size.max(1),
            total,
            current: 1,
        };
        pager.current = current.clamp(1, pager.last_page());
        pager
    }

    /// 总页数，即 `ceil(total / page_size)`
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 跳转到指定页；超出范围时不做任何改变并返回 false
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.current > 1 && self.go_to(self.current - 1)
    }

    /// 当前页的切片
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn info(&self) -> PaginationInfo {
        PaginationInfo {
            page: self.current as i64,
            page_size: self.page_size as i64,
            total: self.total as i64,
            total_pages: self.total_pages() as i64,
        }
    }
}

/// 无状态分页：页码被限制在有效范围内
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    Pager::new(page_size, items.len(), page).slice(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_and_last_page_size() {
        for len in 0..40usize {
            for size in 1..8usize {
                let items: Vec<usize> = (0..len).collect();
                let pager = Pager::new(size, len, 1);
                let pages = len.div_ceil(size);
                assert_eq!(pager.total_pages(), pages);

                let total: usize = (1..=pages).map(|p| paginate(&items, size, p).len()).sum();
                assert_eq!(total, len);

                if pages > 0 {
                    let last = paginate(&items, size, pages).len();
                    let expected = if len % size == 0 { size } else { len % size };
                    assert_eq!(last, expected, "len={len} size={size}");
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_noop() {
        let mut pager = Pager::new(10, 25, 2);
        assert!(!pager.go_to(0));
        assert_eq!(pager.current(), 2);
        assert!(!pager.go_to(4));
        assert_eq!(pager.current(), 2);
        assert!(pager.go_to(3));
        assert_eq!(pager.current(), 3);
        assert!(!pager.next());
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_new_clamps_stored_page() {
        assert_eq!(Pager::new(10, 25, 9).current(), 3);
        assert_eq!(Pager::new(10, 25, 0).current(), 1);
        assert_eq!(Pager::new(10, 0, 4).current(), 1);
        assert_eq!(Pager::new(0, 5, 1).page_size(), 1);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<i32> = (1..=7).collect();
        assert_eq!(paginate(&items, 3, 1), &[1, 2, 3]);
        assert_eq!(paginate(&items, 3, 3), &[7]);
        assert_eq!(paginate(&items, 3, 99), &[7]);
        let empty: Vec<i32> = Vec::new();
        assert!(paginate(&empty, 3, 1).is_empty());
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        sort_by_key(&mut items, SortOrder::Asc, |i| i.0);
        assert_eq!(items, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
        sort_by_key(&mut items, SortOrder::Desc, |i| i.0);
        assert_eq!(items, vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let codes = vec![1u8, 2, 3, 2, 5];
        assert_eq!(filter_eq(codes.clone(), Some(""), |c| *c).len(), 5);
        assert_eq!(filter_eq(codes.clone(), None, |c| *c).len(), 5);
        assert_eq!(filter_eq(codes.clone(), Some("2"), |c| *c), vec![2, 2]);
        assert!(filter_eq(codes, Some("9"), |c| *c).is_empty());
    }

    #[test]
    fn test_optional_key() {
        assert_eq!(optional_key(Some(3)), "3");
        assert_eq!(optional_key(None), "");
    }
}
