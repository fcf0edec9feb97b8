use serde::Deserialize;
use ts_rs::TS;

// 创建考试请求
//
// 日期格式 YYYY-MM-DD，时间格式 HH:MM。
// 若课程不存在会自动创建一条课程记录，课程名称缺省为课程代码。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "exam.ts")]
pub struct CreateExamRequest {
    pub course_code: String,
    pub course_title: Option<String>,
    pub exam_date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue_note: Option<String>,
}

// 已解析的考试数据（用于存储层）
#[derive(Debug, Clone)]
pub struct NewExam {
    pub course_code: String,
    pub course_title: String,
    pub exam_date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub venue_note: Option<String>,
}
