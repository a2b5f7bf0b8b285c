//! Storefront Server - 数字商品店面后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储，七个独立集合 + 启动种子数据
//! - **订单** (`orders`): 下单、轮询支付校验、令牌下载
//! - **授权** (`auth`): 管理接口的可替换授权策略
//! - **HTTP API** (`api`): `/api` 下的 JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── auth/          # 管理授权策略与提取器
//! ├── orders/        # 订单生命周期与支付校验
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、slug、格式化
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{AdminPolicy, BearerTokenPolicy, OpenAdminPolicy};
pub use core::{Config, Server, ServerState, build_router};
pub use orders::{PaymentCheck, PaymentVerifier, RandomPaymentVerifier, StaticPaymentVerifier};
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
  ___ _                 __                _
 / __| |_ ___ _ _ ___  / _|_ _ ___ _ _  | |_
 \__ \  _/ _ \ '_/ -_)|  _| '_/ _ \ ' \ |  _|
 |___/\__\___/_| \___||_| |_| \___/_||_| \__|
    "#
    );
}

/// 设置运行环境：加载 .env，初始化日志
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON")
        .ok()
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"));
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(log_level.as_deref(), log_json, log_dir.as_deref());
}
