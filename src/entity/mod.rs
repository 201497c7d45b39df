//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod classrooms;
pub mod course_assignments;
pub mod departments;
pub mod evaluation_answers;
pub mod evaluation_questions;
pub mod evaluations;
pub mod levels;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

/// unix 秒转 UTC 时间
pub(crate) fn ts_to_datetime(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
