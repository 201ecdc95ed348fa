//! 周课表投影
//!
//! 以周一为一周的开始，周日算作上一周的第 7 天。
//! 节次表固定为 8 节，不由数据决定。

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{PortalError, Result};
use crate::models::classes::entities::Class;
use crate::models::dashboard::responses::{DayColumn, SlotView, TimetableCell, WeekInfo};
use crate::models::periods::entities::{Period, Subject};
use crate::readmodel::resolver::Index;

/// 一个节次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub period: u8,
    pub label: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl Slot {
    const fn new(period: u8, label: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            period,
            label,
            start,
            end,
        }
    }
}

/// 每天 8 节课的作息表
pub const SLOTS: [Slot; 8] = [
    Slot::new(1, "Tiết 1", "07:00", "07:45"),
    Slot::new(2, "Tiết 2", "07:50", "08:35"),
    Slot::new(3, "Tiết 3", "08:50", "09:35"),
    Slot::new(4, "Tiết 4", "09:40", "10:25"),
    Slot::new(5, "Tiết 5", "10:30", "11:15"),
    Slot::new(6, "Tiết 6", "13:00", "13:45"),
    Slot::new(7, "Tiết 7", "13:50", "14:35"),
    Slot::new(8, "Tiết 8", "14:50", "15:35"),
];

const WEEKDAY_LABELS: [&str; 7] = [
    "Thứ Hai",
    "Thứ Ba",
    "Thứ Tư",
    "Thứ Năm",
    "Thứ Sáu",
    "Thứ Bảy",
    "Chủ Nhật",
];

/// 一周的起止时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    /// 周一 00:00:00.000
    pub start: NaiveDateTime,
    /// 周日 23:59:59.999
    pub end: NaiveDateTime,
}

impl WeekBounds {
    pub fn monday(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn sunday(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday() && date <= self.sunday()
    }
}

/// 计算参考日期所在周
///
/// 参考日期靠近可表示范围边界、整周无法表示时返回校验错误。
pub fn week_bounds(reference: NaiveDate) -> Result<WeekBounds> {
    let offset = i64::from(reference.weekday().num_days_from_monday());
    let start = reference
        .checked_sub_signed(Duration::days(offset))
        .map(|monday| monday.and_time(NaiveTime::default()))
        .ok_or_else(|| out_of_range(reference))?;
    let end = start
        .checked_add_signed(Duration::days(7) - Duration::milliseconds(1))
        .ok_or_else(|| out_of_range(reference))?;
    Ok(WeekBounds { start, end })
}

/// 按整周前后移动参考日期
pub fn shift_weeks(reference: NaiveDate, weeks: i64) -> Result<NaiveDate> {
    weeks
        .checked_mul(7)
        .and_then(Duration::try_days)
        .and_then(|delta| reference.checked_add_signed(delta))
        .ok_or_else(|| out_of_range(reference))
}

pub fn week_info(reference: NaiveDate) -> Result<WeekInfo> {
    let bounds = week_bounds(reference)?;
    Ok(WeekInfo {
        reference_date: reference,
        week_start: bounds.start,
        week_end: bounds.end,
        previous_date: shift_weeks(reference, -1)?,
        next_date: shift_weeks(reference, 1)?,
    })
}

fn out_of_range(reference: NaiveDate) -> PortalError {
    PortalError::validation(format!("Ngày không hợp lệ: {reference}"))
}

pub fn slot_views() -> Vec<SlotView> {
    SLOTS
        .iter()
        .map(|slot| SlotView {
            period: slot.period,
            label: slot.label.to_string(),
            start: slot.start.to_string(),
            end: slot.end.to_string(),
        })
        .collect()
}

/// 将课时投影到 7 × 8 的周课表
///
/// 同一日期同一节次有多条课时时取上游返回顺序中的第一条。
/// `class_id` 不为空时只投影该班级的课时。
pub fn project_week(
    periods: &[Period],
    bounds: &WeekBounds,
    class_id: Option<i64>,
    classes: &Index<Class>,
    subjects: &Index<Subject>,
) -> Vec<DayColumn> {
    let mut by_slot: HashMap<(NaiveDate, u8), &Period> = HashMap::new();
    for period in periods {
        if !bounds.contains(period.period_date) {
            continue;
        }
        if class_id.is_some() && period.class_id != class_id {
            continue;
        }
        by_slot
            .entry((period.period_date, period.period_no))
            .or_insert(period);
    }

    (0..7)
        .map(|offset| {
            let date = bounds.monday() + Duration::days(offset);
            let cells = SLOTS
                .iter()
                .map(|slot| {
                    by_slot
                        .get(&(date, slot.period))
                        .map(|period| project_cell(period, classes, subjects))
                })
                .collect();
            DayColumn {
                date,
                weekday: WEEKDAY_LABELS[offset as usize].to_string(),
                cells,
            }
        })
        .collect()
}

fn project_cell(
    period: &Period,
    classes: &Index<Class>,
    subjects: &Index<Subject>,
) -> TimetableCell {
    TimetableCell {
        period_id: period.id,
        period_no: period.period_no,
        subject_id: period.subject_id,
        subject_name: subjects.label(period.subject_id),
        class_id: period.class_id,
        class_name: classes.label(period.class_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(id: i64, day: NaiveDate, no: u8, class_id: i64, subject_id: i64) -> Period {
        Period {
            id,
            period_no: no,
            period_date: day,
            class_id: Some(class_id),
            subject_id: Some(subject_id),
            teacher_id: None,
        }
    }

    fn fixtures() -> (Index<Class>, Index<Subject>) {
        let classes = Index::build(vec![Class {
            id: 5,
            name: "10A5".to_string(),
            teacher_homeroom_id: None,
            school_year_id: None,
        }]);
        let subjects = Index::build(vec![Subject {
            id: 2,
            name: "Toán".to_string(),
        }]);
        (classes, subjects)
    }

    #[test]
    fn test_week_bounds_always_monday_to_sunday() {
        // 2024-06-03 是周一，覆盖整周及跨月、跨年的情况
        let mut day = date(2024, 5, 27);
        while day <= date(2025, 1, 12) {
            let bounds = week_bounds(day).unwrap();
            assert_eq!(bounds.monday().weekday(), Weekday::Mon, "{day}");
            assert_eq!(bounds.sunday().weekday(), Weekday::Sun, "{day}");
            assert_eq!(bounds.sunday() - bounds.monday(), Duration::days(6));
            assert!(bounds.contains(day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_sunday_belongs_to_previous_week() {
        let bounds = week_bounds(date(2024, 6, 9)).unwrap();
        assert_eq!(bounds.monday(), date(2024, 6, 3));
        assert_eq!(bounds.sunday(), date(2024, 6, 9));
    }

    #[test]
    fn test_week_bounds_cover_full_days() {
        let bounds = week_bounds(date(2024, 6, 5)).unwrap();
        assert_eq!(bounds.start.to_string(), "2024-06-03 00:00:00");
        assert_eq!(
            bounds.end.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2024-06-09 23:59:59.999"
        );
    }

    #[test]
    fn test_wednesday_scenario_projects_single_cell() {
        let (classes, subjects) = fixtures();
        let periods = vec![period(1, date(2024, 6, 3), 1, 5, 2)];
        let bounds = week_bounds(date(2024, 6, 5)).unwrap();
        assert_eq!(bounds.monday(), date(2024, 6, 3));
        assert_eq!(bounds.sunday(), date(2024, 6, 9));

        let days = project_week(&periods, &bounds, None, &classes, &subjects);
        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|d| d.cells.len() == SLOTS.len()));

        let cell = days[0].cells[0].as_ref().unwrap();
        assert_eq!(cell.subject_name, "Toán");
        assert_eq!(cell.class_name, "10A5");
        assert_eq!(days[0].weekday, "Thứ Hai");

        let filled = days
            .iter()
            .flat_map(|d| d.cells.iter())
            .filter(|c| c.is_some())
            .count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn test_first_match_in_fetch_order_wins() {
        let (classes, subjects) = fixtures();
        let monday = date(2024, 6, 3);
        let periods = vec![period(1, monday, 2, 5, 2), period(2, monday, 2, 5, 3)];
        let bounds = week_bounds(monday).unwrap();
        let days = project_week(&periods, &bounds, None, &classes, &subjects);
        let cell = days[0].cells[1].as_ref().unwrap();
        assert_eq!(cell.period_id, 1);
    }

    #[test]
    fn test_unresolved_references_use_placeholders() {
        let (classes, subjects) = fixtures();
        let tuesday = date(2024, 6, 4);
        let periods = vec![period(3, tuesday, 8, 42, 77)];
        let bounds = week_bounds(tuesday).unwrap();
        let days = project_week(&periods, &bounds, None, &classes, &subjects);
        let cell = days[1].cells[7].as_ref().unwrap();
        assert_eq!(cell.class_name, "Lớp 42");
        assert_eq!(cell.subject_name, "Môn 77");
    }

    #[test]
    fn test_class_filter_and_out_of_week_periods_are_skipped() {
        let (classes, subjects) = fixtures();
        let monday = date(2024, 6, 3);
        let periods = vec![
            period(1, monday, 1, 6, 2),
            period(2, date(2024, 6, 10), 1, 5, 2),
            period(3, monday, 9, 5, 2),
        ];
        let bounds = week_bounds(monday).unwrap();
        let days = project_week(&periods, &bounds, Some(5), &classes, &subjects);
        assert!(days.iter().flat_map(|d| d.cells.iter()).all(|c| c.is_none()));
    }

    #[test]
    fn test_week_navigation_moves_by_seven_days() {
        let reference = date(2024, 6, 5);
        let info = week_info(reference).unwrap();
        assert_eq!(info.previous_date, date(2024, 5, 29));
        assert_eq!(info.next_date, date(2024, 6, 12));
        let next = shift_weeks(reference, 1).unwrap();
        let previous = shift_weeks(reference, -1).unwrap();
        assert_eq!(week_bounds(next).unwrap().monday(), date(2024, 6, 10));
        assert_eq!(week_bounds(previous).unwrap().monday(), date(2024, 5, 27));
    }

    #[test]
    fn test_dates_at_calendar_edges_are_rejected() {
        // 最大日期是周一，所在周的周日无法表示
        assert!(week_bounds(NaiveDate::MAX).is_err());
        assert!(week_info(NaiveDate::MAX).is_err());
        assert!(week_info(NaiveDate::MIN).is_err());
        assert!(shift_weeks(date(2024, 6, 5), i64::MAX).is_err());

        let err = week_info(NaiveDate::MAX).unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}
