//! 工具模块 - 通用工具函数
//!
//! - 日志初始化
//! - 输入校验
//! - 时间格式化

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use time::format_elapsed;
