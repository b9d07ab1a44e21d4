//! Field labels of the absence form
//!
//! These are the keys shared by the form data and the text-position files.

/// Student name
pub const NAME: &str = "氏名";
/// Student ID
pub const STUDENT_ID: &str = "学籍番号";
/// Application month
pub const MONTH: &str = "申請_月";
/// Application day
pub const DAY: &str = "申請_日";
/// Reason for absence
pub const REASON: &str = "理由";
/// Subject of the first period
pub const SUBJECT: &str = "科目1_科目名";
/// Teacher of the first period subject
pub const TEACHER: &str = "科目1_教員名";
/// Outbound transport category
pub const OUTBOUND_TRANSPORT: &str = "行き_区分";
/// Return transport category
pub const RETURN_TRANSPORT: &str = "帰り_区分";
/// Outbound departure hour
pub const OUTBOUND_HOUR: &str = "行き_時間";
/// Outbound departure minute
pub const OUTBOUND_MINUTE: &str = "行き_分";
/// Return departure hour
pub const RETURN_HOUR: &str = "帰り_時間";
/// Return departure minute
pub const RETURN_MINUTE: &str = "帰り_分";

/// Categorical fields drawn as marks rather than text
pub const MARK_FIELDS: [&str; 2] = [OUTBOUND_TRANSPORT, RETURN_TRANSPORT];
