//! 各页面的视图状态集合

use crate::config::ViewConfig;
use crate::models::user_accounts::entities::UserAccount;
use crate::readmodel::{Index, ViewStore};

use super::activity_logs::ActivityLogsSnapshot;
use super::classes::ClassesSnapshot;
use super::dashboard::{ChildrenSnapshot, TimetableSnapshot};
use super::evaluations::EvaluationsSnapshot;
use super::periods::PeriodSnapshot;
use super::school_years::SchoolYearsSnapshot;
use super::teachers::TeachersSnapshot;

/// 进程内的全部视图状态，启动时创建一次并通过 app_data 共享
pub struct ViewStores {
    pub classes: ViewStore<ClassesSnapshot>,
    pub teachers: ViewStore<TeachersSnapshot>,
    pub user_accounts: ViewStore<Index<UserAccount>>,
    pub school_years: ViewStore<SchoolYearsSnapshot>,
    pub semesters: ViewStore<SchoolYearsSnapshot>,
    pub evaluations: ViewStore<EvaluationsSnapshot>,
    pub activity_logs: ViewStore<ActivityLogsSnapshot>,
    pub periods: ViewStore<PeriodSnapshot>,
    pub children: ViewStore<ChildrenSnapshot>,
    pub timetables: ViewStore<TimetableSnapshot>,
    limits: ViewConfig,
}

impl ViewStores {
    pub fn new(limits: ViewConfig) -> Self {
        Self {
            classes: ViewStore::from_config(&limits),
            teachers: ViewStore::from_config(&limits),
            user_accounts: ViewStore::from_config(&limits),
            school_years: ViewStore::from_config(&limits),
            semesters: ViewStore::from_config(&limits),
            evaluations: ViewStore::from_config(&limits),
            activity_logs: ViewStore::from_config(&limits),
            periods: ViewStore::from_config(&limits),
            children: ViewStore::from_config(&limits),
            timetables: ViewStore::from_config(&limits),
            limits,
        }
    }

    pub fn limits(&self) -> &ViewConfig {
        &self.limits
    }

    /// 任意写操作成功后调用：各页面的联表结果都可能受影响
    pub fn mark_all_dirty(&self) {
        self.classes.mark_all_dirty();
        self.teachers.mark_all_dirty();
        self.user_accounts.mark_all_dirty();
        self.school_years.mark_all_dirty();
        self.semesters.mark_all_dirty();
        self.evaluations.mark_all_dirty();
        self.activity_logs.mark_all_dirty();
        self.periods.mark_all_dirty();
        self.children.mark_all_dirty();
        self.timetables.mark_all_dirty();
    }
}

impl Default for ViewStores {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
