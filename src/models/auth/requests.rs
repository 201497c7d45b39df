use serde::Deserialize;
use ts_rs::TS;

// 管理端账号登录
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// 学生登录：学号 + 姓名
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct StudentLoginRequest {
    #[serde(alias = "studentCode")]
    pub student_code: String,
    #[serde(alias = "fullName")]
    pub full_name: String,
}
