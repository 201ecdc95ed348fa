//! 读模型层
//!
//! 拉取 → 关联 → 投影：页面所需的所有数据加工都在这里完成。

pub mod fetcher;
pub mod listing;
pub mod resolver;
pub mod schedule;
pub mod view_state;

pub use listing::{Pager, SortOrder};
pub use resolver::{Index, Keyed, Labeled};
pub use view_state::{ViewOutcome, ViewPhase, ViewStore};
