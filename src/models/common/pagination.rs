use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::readmodel::listing::SortOrder;

// 列表页查询参数（分页、排序、筛选均在快照上完成）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub order: Option<SortOrder>,
    // 单字段等值筛选，空字符串表示不筛选
    pub filter: Option<String>,
    // 为 true 时强制重新拉取上游数据
    pub refresh: Option<bool>,
}

impl ListParams {
    pub fn wants_refresh(&self) -> bool {
        self.refresh.unwrap_or(false)
    }

    pub fn filter_value(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}
