//! 批量拉取
//!
//! 同一批次内的请求并发执行，等全部结束后才合并结果。
//! 任意一个请求失败则整批视为失败，不会产生部分结果，也不会重试。

/// 并发执行一批互不依赖的上游请求
///
/// ```ignore
/// let (classes, subjects) = fetch_batch!(
///     classes = upstream.list_classes(),
///     subjects = upstream.list_subjects(),
/// )?;
/// ```
///
/// 返回 `Result<(A, B, ...)>`；多个请求失败时返回声明顺序中的第一个错误。
macro_rules! fetch_batch {
    ($($name:ident = $fut:expr),+ $(,)?) => {{
        let ($($name,)+) = futures_util::join!($($fut),+);
        let settled = || -> $crate::errors::Result<_> { Ok(($($name?,)+)) };
        settled()
    }};
}

pub(crate) use fetch_batch;
