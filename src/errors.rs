//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_seater_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SeaterError {
            $($variant(String),)*
        }

        impl SeaterError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SeaterError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SeaterError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SeaterError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SeaterError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SeaterError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_seater_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Unique Constraint Violation"),
    Reference("E008", "Foreign Key Violation"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
}

impl SeaterError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SeaterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SeaterError {}

impl SeaterError {
    /// 根据数据库错误种类分类，附带上下文说明
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        use sea_orm::SqlErr;
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                SeaterError::Conflict(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                SeaterError::Reference(format!("{context}: {detail}"))
            }
            _ => SeaterError::DatabaseOperation(format!("{context}: {err}")),
        }
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SeaterError {
    fn from(err: sea_orm::DbErr) -> Self {
        SeaterError::from_db("database error", err)
    }
}

impl From<std::io::Error> for SeaterError {
    fn from(err: std::io::Error) -> Self {
        SeaterError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SeaterError {
    fn from(err: serde_json::Error) -> Self {
        SeaterError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SeaterError {
    fn from(err: chrono::ParseError) -> Self {
        SeaterError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeaterError>;
