//! 管理接口授权
//!
//! - **policy**: [`AdminPolicy`] 能力及两种实现
//! - **extractor**: [`AdminAccess`] 提取器，受保护的处理器声明它即可

mod extractor;
mod policy;

pub use extractor::AdminAccess;
pub use policy::{AdminPolicy, BearerTokenPolicy, OpenAdminPolicy};
