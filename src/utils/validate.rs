use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, SeaterError};

// 课程代码：字母数字开头，可含 _ - . /
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_./-]*$").expect("Invalid code regex"));

pub fn validate_code(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeaterError::validation(format!("{field} required")));
    }
    if value.len() > max_len {
        return Err(SeaterError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    if !CODE_RE.is_match(value) {
        return Err(SeaterError::validation(format!(
            "{field} must contain only letters, digits, '_', '-', '.' or '/'"
        )));
    }
    Ok(())
}

pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeaterError::validation(format!("{field} required")));
    }
    Ok(())
}

/// 自由文本编号（考场号、学号、工号）：非空且不超过长度上限
pub fn validate_label(field: &str, value: &str, max_len: usize) -> Result<()> {
    validate_required(field, value)?;
    if value.chars().count() > max_len {
        return Err(SeaterError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

pub fn validate_capacity(capacity: i32) -> Result<()> {
    if capacity < 1 {
        return Err(SeaterError::validation("capacity must be at least 1"));
    }
    Ok(())
}

/// 解析 YYYY-MM-DD 日期
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        SeaterError::date_parse(format!("{field} must be YYYY-MM-DD ({e}): '{value}'"))
    })
}

/// 解析 HH:MM 时间，同时接受 HH:MM:SS
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| SeaterError::date_parse(format!("{field} must be HH:MM ({e}): '{value}'")))
}

/// 解析时间段，结束时间必须晚于开始时间
pub fn parse_time_range(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime)> {
    let start_time = parse_time("start_time", start)?;
    let end_time = parse_time("end_time", end)?;
    if end_time <= start_time {
        return Err(SeaterError::validation(
            "end_time must be later than start_time",
        ));
    }
    Ok((start_time, end_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        assert!(validate_code("room_code", "LH-101", 50).is_ok());
        assert!(validate_code("roll", "2021/CS/042", 50).is_ok());
        assert!(validate_code("course_code", "CS101", 20).is_ok());
    }

    #[test]
    fn test_empty_code() {
        let err = validate_code("room_code", "   ", 50).unwrap_err();
        assert_eq!(err.message(), "room_code required");
    }

    #[test]
    fn test_code_too_long() {
        assert!(validate_code("course_code", &"C".repeat(21), 20).is_err());
    }

    #[test]
    fn test_code_bad_characters() {
        assert!(validate_code("room_code", "Room 1", 50).is_err());
        assert!(validate_code("room_code", "-R1", 50).is_err());
    }

    #[test]
    fn test_label_accepts_spaces_and_symbols() {
        assert!(validate_label("room_code", "Hall A", 50).is_ok());
        assert!(validate_label("roll", "2021 CSE 001", 50).is_ok());
        assert!(validate_label("emp", "EMP#7 (visiting)", 100).is_ok());
    }

    #[test]
    fn test_label_required_and_bounded() {
        let err = validate_label("room_code", "  ", 50).unwrap_err();
        assert_eq!(err.message(), "room_code required");
        assert!(validate_label("room_code", &"x".repeat(51), 50).is_err());
        assert!(validate_label("room_code", &"é".repeat(50), 50).is_ok());
    }

    #[test]
    fn test_capacity() {
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-3).is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("exam_date", "2025-05-20").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
        assert!(parse_date("exam_date", "20/05/2025").is_err());
    }

    #[test]
    fn test_parse_time_formats() {
        let expected = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(parse_time("start_time", "09:30").unwrap(), expected);
        assert_eq!(parse_time("start_time", "09:30:00").unwrap(), expected);
        assert!(parse_time("start_time", "9.30am").is_err());
    }

    #[test]
    fn test_time_range_order() {
        assert!(parse_time_range("09:00", "12:00").is_ok());
        let err = parse_time_range("12:00", "09:00").unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(parse_time_range("09:00", "09:00").is_err());
    }
}
