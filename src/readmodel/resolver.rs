//! 引用解析
//!
//! 每次拉取到新的快照后为各集合建立一次 `id → 实体` 索引，
//! 之后的外键解析都是 O(1) 查找。解析是全函数：找不到时返回占位文本，不会失败。

use std::collections::HashMap;

/// 外键缺失时的显示文本
pub const MISSING_LABEL: &str = "Chưa xác định";

/// 拥有整数主键的实体
pub trait Keyed {
    fn key(&self) -> i64;
}

/// 可显示的实体，附带解析失败时的占位前缀
pub trait Labeled: Keyed {
    const PLACEHOLDER: &'static str;

    fn label(&self) -> String;
}

/// 解析失败时的占位文本，例如 `Lớp 7`
pub fn placeholder<T: Labeled>(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{} {id}", T::PLACEHOLDER),
        None => MISSING_LABEL.to_string(),
    }
}

/// 按主键索引的只读集合，保留上游返回顺序
#[derive(Debug, Clone)]
pub struct Index<T> {
    items: Vec<T>,
    positions: HashMap<i64, usize>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Keyed> Index<T> {
    /// 建立索引；主键重复时以先出现的记录为准
    pub fn build(items: Vec<T>) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            positions.entry(item.key()).or_insert(pos);
        }
        Self { items, positions }
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.positions.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn resolve(&self, id: Option<i64>) -> Option<&T> {
        id.and_then(|id| self.get(id))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.positions.contains_key(&id)
    }
}

impl<T> Index<T> {
    /// 按上游返回顺序遍历
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Labeled> Index<T> {
    /// 解析为显示名称，失败时返回占位文本
    pub fn label(&self, id: Option<i64>) -> String {
        self.resolve(id)
            .map(Labeled::label)
            .unwrap_or_else(|| placeholder::<T>(id))
    }
}

impl<T: Keyed> From<Vec<T>> for Index<T> {
    fn from(items: Vec<T>) -> Self {
        Self::build(items)
    }
}

/// 多跳解析：先在 `first` 中解析 `id`，再沿 `hop` 给出的外键到 `second` 中解析。
/// 任意一跳失败都返回 `None`，由调用方渲染链首实体的占位文本。
pub fn resolve_through<'a, A, B>(
    first: &'a Index<A>,
    id: Option<i64>,
    hop: impl Fn(&A) -> Option<i64>,
    second: &'a Index<B>,
) -> Option<&'a B>
where
    A: Keyed,
    B: Keyed,
{
    first.resolve(id).and_then(|a| second.resolve(hop(a)))
}

/// 多跳解析为显示名称，失败时返回链首实体的占位文本
pub fn label_through<A, B>(
    first: &Index<A>,
    id: Option<i64>,
    hop: impl Fn(&A) -> Option<i64>,
    second: &Index<B>,
) -> String
where
    A: Labeled,
    B: Labeled,
{
    resolve_through(first, id, hop, second)
        .map(Labeled::label)
        .unwrap_or_else(|| placeholder::<A>(id))
}
