//! 工具模块
//!
//! - [`logger`] - 日志初始化
//! - [`slug`] - URL slug 生成
//! - [`format`] - 数字展示格式

pub mod format;
pub mod logger;
pub mod slug;

pub use format::format_thousands;
pub use slug::slugify;
