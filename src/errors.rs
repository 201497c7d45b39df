//! 统一错误处理模块
//!
//! 错误类型由宏生成，每个变体带有稳定的错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / message()
/// - snake_case 便捷构造函数
macro_rules! define_evalsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EvalSystemError {
            $($variant(String),)*
        }

        impl EvalSystemError {
            /// 错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EvalSystemError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EvalSystemError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(EvalSystemError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl EvalSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EvalSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_evalsystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Resource Conflict"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Import("E014", "Import Error"),
    Export("E015", "Export Error"),
}

impl EvalSystemError {
    /// 彩色输出（开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突
    ///
    /// SQLite / PostgreSQL / MySQL 的报错文本各不相同，这里统一判断。
    pub fn is_unique_violation(&self) -> bool {
        if matches!(self, EvalSystemError::Conflict(_)) {
            return true;
        }
        let msg = self.message();
        msg.contains("UNIQUE constraint failed")
            || msg.contains("duplicate key value")
            || msg.contains("Duplicate entry")
    }
}

impl fmt::Display for EvalSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EvalSystemError {}

impl From<sea_orm::DbErr> for EvalSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        EvalSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EvalSystemError {
    fn from(err: std::io::Error) -> Self {
        EvalSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EvalSystemError {
    fn from(err: serde_json::Error) -> Self {
        EvalSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EvalSystemError {
    fn from(err: chrono::ParseError) -> Self {
        EvalSystemError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for EvalSystemError {
    fn from(err: csv::Error) -> Self {
        EvalSystemError::Import(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for EvalSystemError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        EvalSystemError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvalSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EvalSystemError::cache_connection("x").code(), "E001");
        assert_eq!(EvalSystemError::validation("x").code(), "E007");
        assert_eq!(EvalSystemError::conflict("x").code(), "E010");
        assert_eq!(EvalSystemError::import("x").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EvalSystemError::not_found("x").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            EvalSystemError::export("x").error_type(),
            "Export Error"
        );
    }

    #[test]
    fn test_unique_violation_detection() {
        let sqlite = EvalSystemError::database_operation(
            "Failed to create student: UNIQUE constraint failed: students.student_code",
        );
        let pg = EvalSystemError::database_operation(
            "duplicate key value violates unique constraint \"students_student_code_key\"",
        );
        let mysql = EvalSystemError::database_operation("Duplicate entry '65001' for key");
        assert!(sqlite.is_unique_violation());
        assert!(pg.is_unique_violation());
        assert!(mysql.is_unique_violation());
        assert!(EvalSystemError::conflict("dup").is_unique_violation());
        assert!(!EvalSystemError::database_operation("disk I/O error").is_unique_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = EvalSystemError::validation("score out of range");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("score out of range"));
    }
}
