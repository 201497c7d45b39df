//! 数据模型定义
//!
//! 业务实体、请求与响应结构，以及统一的业务错误码。

pub mod auth;
pub mod classrooms;
pub mod common;
pub mod course_assignments;
pub mod dashboard;
pub mod departments;
pub mod evaluation_answers;
pub mod evaluation_questions;
pub mod evaluations;
pub mod levels;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, PageMeta, PaginatedResponse, PaginationQuery};

use serde::Serialize;

/// 业务错误码
///
/// 0 表示成功；1xxx 通用；2xxx 认证；3xxx 账号；4xxx 学籍与课程；5xxx 评价；6xxx 导入导出。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    AuthFailed = 2000,
    AccountDisabled = 2001,
    StudentLoginFailed = 2002,
    TokenGenerationFailed = 2003,

    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserNameAlreadyExists = 3002,
    UserPasswordInvalid = 3003,
    UserRoleInvalid = 3004,
    CanNotDeleteCurrentUser = 3005,

    DepartmentNotFound = 4000,
    LevelNotFound = 4001,
    ClassroomNotFound = 4002,
    StudentNotFound = 4003,
    TeacherNotFound = 4004,
    SubjectNotFound = 4005,
    AssignmentNotFound = 4006,
    DepartmentAlreadyExists = 4010,
    StudentCodeAlreadyExists = 4011,
    SubjectCodeAlreadyExists = 4012,
    AssignmentAlreadyExists = 4013,

    EvaluationNotFound = 5000,
    QuestionNotFound = 5001,
    AnswerNotFound = 5002,
    EvaluationAlreadySubmitted = 5010,
    EvaluationAnswersIncomplete = 5011,
    ScoreOutOfRange = 5012,
    AssignmentNotInClassroom = 5013,
    AnswerAlreadyExists = 5014,
    QuestionTextInvalid = 5015,

    ImportFileMissing = 6000,
    ImportFileParseFailed = 6001,
    ImportFileMissingColumn = 6002,
    ImportFileDataInvalid = 6003,
    ImportTooManyRows = 6004,
    FileTypeNotAllowed = 6005,
    FileSizeExceeded = 6006,
    ExportFailed = 6100,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::NotFound as i32, 1004);
        assert_eq!(ErrorCode::EvaluationAlreadySubmitted as i32, 5010);
        assert_eq!(ErrorCode::ImportTooManyRows as i32, 6004);
    }
}
