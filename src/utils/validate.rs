//! 表单校验
//!
//! 所有校验失败都返回 `PortalError::Validation`，详情即为展示给用户的越南语提示。

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{PortalError, Result};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static SCHOOL_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{4})$").expect("Invalid school year regex"));

/// 必填文本，返回去除首尾空白后的值
pub fn require_text<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PortalError::validation(message));
    }
    Ok(trimmed)
}

/// 必选项（下拉框等）
pub fn require_selection<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| PortalError::validation(message))
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(PortalError::validation("Email không hợp lệ"));
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 至少包含一个字母和一个数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Mật khẩu phải có ít nhất 8 ký tự");
    }

    if !password.chars().any(|c| c.is_alphabetic()) {
        errors.push("Mật khẩu phải chứa ít nhất một chữ cái");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Mật khẩu phải chứa ít nhất một chữ số");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 新密码：策略 + 两次输入一致
pub fn validate_new_password(password: &str, confirm_password: &str) -> Result<()> {
    let result = validate_password(password);
    if !result.is_valid {
        return Err(PortalError::validation(result.error_message()));
    }
    if password != confirm_password {
        return Err(PortalError::validation("Mật khẩu xác nhận không khớp"));
    }
    Ok(())
}

/// 学年格式 `YYYY-YYYY`，且两个年份相邻
pub fn validate_school_year(year: &str) -> Result<()> {
    let captures = SCHOOL_YEAR_RE.captures(year.trim()).ok_or_else(|| {
        PortalError::validation("Năm học phải có dạng YYYY-YYYY, ví dụ 2024-2025")
    })?;
    // 正则已保证是四位数字
    let start: i32 = captures[1].parse().unwrap_or_default();
    let end: i32 = captures[2].parse().unwrap_or_default();
    if end != start + 1 {
        return Err(PortalError::validation(
            "Năm kết thúc phải lớn hơn năm bắt đầu đúng 1 năm",
        ));
    }
    Ok(())
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start >= end {
        return Err(PortalError::validation(
            "Ngày bắt đầu phải trước ngày kết thúc",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("matkhau123").is_valid);
        assert!(validate_password("Hoc8sinhgioi").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("abc12");
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"Mật khẩu phải có ít nhất 8 ký tự"));
    }

    #[test]
    fn test_password_needs_letter_and_digit() {
        let result = validate_password("12345678");
        assert_eq!(result.errors, vec!["Mật khẩu phải chứa ít nhất một chữ cái"]);
        let result = validate_password("abcdefgh");
        assert_eq!(result.errors, vec!["Mật khẩu phải chứa ít nhất một chữ số"]);
    }

    #[test]
    fn test_confirmation_mismatch() {
        let err = validate_new_password("matkhau123", "matkhau124").unwrap_err();
        assert_eq!(err.message(), "Mật khẩu xác nhận không khớp");
        assert!(validate_new_password("matkhau123", "matkhau123").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("giaovien@truong.edu.vn").is_ok());
        assert!(validate_email("khong-hop-le").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_school_year_format() {
        assert!(validate_school_year("2024-2025").is_ok());
        assert!(validate_school_year("2024-2026").is_err());
        assert!(validate_school_year("2024/2025").is_err());
        assert!(validate_school_year("24-25").is_err());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(require_text("  10A1 ", "x").unwrap(), "10A1");
        assert_eq!(
            require_text("   ", "Vui lòng nhập tên lớp").unwrap_err(),
            PortalError::validation("Vui lòng nhập tên lớp")
        );
        assert_eq!(require_selection(Some(3), "x").unwrap(), 3);
        assert!(require_selection::<i64>(None, "x").is_err());
    }

    #[test]
    fn test_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(end, start).is_err());
        assert!(validate_date_range(start, start).is_err());
    }
}
