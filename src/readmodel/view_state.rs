//! 页面视图状态
//!
//! 每个页面的状态机：`Idle → Loading → {Ready | Failed}`，没有自动重试。
//! 快照只会被整体替换；失败时保留上一次的快照。
//! 每次进入 Loading 都会分配新的代号，晚到的旧代号结果直接丢弃。
//! 视图集合有容量上限，长时间未访问的视图会被淘汰。

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use moka::sync::Cache;
use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::config::ViewConfig;
use crate::errors::{PortalError, Result};

/// 视图所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ViewPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// 一次加载的代号
///
/// 同时记录开始加载时的失效计数，加载期间发生的写操作不会被覆盖。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    id: u64,
    invalidations: u64,
}

/// 单个视图的状态
#[derive(Debug)]
pub struct ViewState<T> {
    phase: ViewPhase,
    generation: u64,
    invalidations: u64,
    snapshot: Option<Arc<T>>,
    error: Option<PortalError>,
    dirty: bool,
    page: usize,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Idle,
            generation: 0,
            invalidations: 0,
            snapshot: None,
            error: None,
            dirty: false,
            page: 1,
        }
    }
}

impl<T> ViewState<T> {
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// 进入 Loading 并分配新代号，之前的代号全部作废
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.phase = ViewPhase::Loading;
        Generation {
            id: self.generation,
            invalidations: self.invalidations,
        }
    }

    /// 标记快照过期，正在进行的加载结果也随之过期
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.invalidations += 1;
    }

    /// 提交加载结果，仅最新代号生效；返回是否被采纳
    pub fn settle(&mut self, generation: Generation, result: Result<T>) -> bool {
        if generation.id != self.generation {
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(Arc::new(snapshot));
                self.error = None;
                self.dirty = generation.invalidations != self.invalidations;
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                self.error = Some(err);
                self.phase = ViewPhase::Failed;
            }
        }
        true
    }

    pub fn outcome(&self, applied: bool) -> ViewOutcome<T> {
        ViewOutcome {
            phase: self.phase,
            snapshot: self.snapshot.clone(),
            error: self.error.clone(),
            applied,
        }
    }
}

/// 一次加载后的视图结果
#[derive(Debug)]
pub struct ViewOutcome<T> {
    pub phase: ViewPhase,
    pub snapshot: Option<Arc<T>>,
    pub error: Option<PortalError>,
    /// 本次结果是否被采纳（false 表示已被更新的加载取代）
    pub applied: bool,
}

impl<T> ViewOutcome<T> {
    pub fn ready(snapshot: Arc<T>) -> Self {
        Self {
            phase: ViewPhase::Ready,
            snapshot: Some(snapshot),
            error: None,
            applied: true,
        }
    }
}

/// 以视图键（会话、页面参数）区分的视图状态集合
pub struct ViewStore<T> {
    entries: Cache<String, Arc<Mutex<ViewState<T>>>>,
}

impl<T: Send + Sync + 'static> Default for ViewStore<T> {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl<T: Send + Sync + 'static> ViewStore<T> {
    pub fn new(max_views: u64, idle: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_views)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.max_views, Duration::from_secs(config.idle_seconds))
    }

    fn handle(&self, key: &str) -> Arc<Mutex<ViewState<T>>> {
        self.entries
            .get_with(key.to_string(), || Arc::new(Mutex::new(ViewState::default())))
    }

    fn existing(&self, key: &str) -> Option<Arc<Mutex<ViewState<T>>>> {
        self.entries.get(key)
    }

    pub fn phase(&self, key: &str) -> ViewPhase {
        self.existing(key)
            .map(|state| lock(&state).phase())
            .unwrap_or(ViewPhase::Idle)
    }

    pub fn begin(&self, key: &str) -> Generation {
        lock(&self.handle(key)).begin()
    }

    pub fn settle(&self, key: &str, generation: Generation, result: Result<T>) -> ViewOutcome<T> {
        settle_into(&self.handle(key), key, generation, result)
    }

    /// 可直接复用的快照：处于 Ready 且未被标记为过期
    pub fn fresh_snapshot(&self, key: &str) -> Option<Arc<T>> {
        self.existing(key).and_then(|state| {
            let state = lock(&state);
            if state.phase == ViewPhase::Ready && !state.dirty {
                state.snapshot.clone()
            } else {
                None
            }
        })
    }

    /// 写操作成功后调用，所有会话下次读取时重新拉取
    pub fn mark_all_dirty(&self) {
        for (_, state) in self.entries.iter() {
            lock(&state).mark_dirty();
        }
    }

    pub fn page(&self, key: &str) -> usize {
        self.existing(key)
            .map(|state| lock(&state).page)
            .unwrap_or(1)
    }

    pub fn set_page(&self, key: &str, page: usize) {
        lock(&self.handle(key)).page = page;
    }

    /// 当前保存的视图数量（淘汰是异步的，可能略有滞后）
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 加载视图
    ///
    /// 未要求刷新且已有可用快照时直接复用；否则进入 Loading，
    /// 执行 `fetch` 并按代号提交结果。加载期间视图被淘汰时，
    /// 结果仍返回给本次请求，但不再缓存。
    pub async fn load<F, Fut>(&self, key: &str, refresh: bool, fetch: F) -> ViewOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !refresh {
            if let Some(snapshot) = self.fresh_snapshot(key) {
                return ViewOutcome::ready(snapshot);
            }
        }
        let state = self.handle(key);
        let generation = lock(&state).begin();
        let result = fetch().await;
        settle_into(&state, key, generation, result)
    }
}

fn settle_into<T>(
    state: &Mutex<ViewState<T>>,
    key: &str,
    generation: Generation,
    result: Result<T>,
) -> ViewOutcome<T> {
    let mut state = lock(state);
    let failure = result.as_ref().err().cloned();
    let applied = state.settle(generation, result);
    if !applied {
        debug!("Discarding stale result for view '{}'", key);
    } else if let Some(err) = failure {
        warn!("View '{}' failed to load: {}", key, err);
    }
    state.outcome(applied)
}

// 状态更新不会中途 panic，中毒的锁直接沿用
fn lock<T>(state: &Mutex<ViewState<T>>) -> MutexGuard<'_, ViewState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
