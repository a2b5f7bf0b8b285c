use std::path::PathBuf;

/// 默认收款地址 (BIP-173 示例地址，仅用于开发环境)
pub const DEFAULT_BTC_ADDRESS: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";

/// 服务器配置 - 店面后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DB_NAMESPACE | storefront | SurrealDB namespace |
/// | DB_NAME | storefront | SurrealDB database |
/// | PAYMENT_BTC_ADDRESS | BIP-173 示例地址 | 所有订单共用的收款地址 |
/// | ORDER_EXPIRY_MINUTES | 30 | 订单支付窗口 (分钟) |
/// | DOWNLOAD_TTL_HOURS | 24 | 下载链接有效期 (小时) |
/// | DOWNLOAD_BASE_URL | https://downloads.example.com | 下载链接前缀 |
/// | PAYMENT_CONFIRM_PROBABILITY | 0.3333 | 模拟支付校验的成功概率 |
/// | ADMIN_TOKEN | (未设置) | 设置后管理接口需要 Bearer token |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时 (毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/storefront HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_name: String,

    // === 订单与支付 ===
    /// 收款地址 (所有订单共用，无法按订单区分来款)
    pub payment_btc_address: String,
    /// 订单支付窗口 (分钟)
    pub order_expiry_minutes: i64,
    /// 下载链接有效期 (小时)
    pub download_ttl_hours: i64,
    /// 下载链接前缀
    pub download_base_url: String,
    /// 模拟支付校验成功概率 [0, 1]
    pub payment_confirm_probability: f64,

    /// 管理接口 token (None 表示不做校验)
    pub admin_token: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "storefront".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "storefront".into()),

            payment_btc_address: std::env::var("PAYMENT_BTC_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BTC_ADDRESS.into()),
            order_expiry_minutes: std::env::var("ORDER_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            download_ttl_hours: std::env::var("DOWNLOAD_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            download_base_url: std::env::var("DOWNLOAD_BASE_URL")
                .unwrap_or_else(|_| "https://downloads.example.com".into()),
            payment_confirm_probability: std::env::var("PAYMENT_CONFIRM_PROBABILITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1.0 / 3.0),

            admin_token: std::env::var("ADMIN_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 校验配置，返回第一个错误
    pub fn validate(&self) -> Result<(), String> {
        if self.payment_btc_address.trim().is_empty() {
            return Err("PAYMENT_BTC_ADDRESS must not be empty".into());
        }
        if !(0.0..=1.0).contains(&self.payment_confirm_probability) {
            return Err(format!(
                "PAYMENT_CONFIRM_PROBABILITY must be within [0, 1], got {}",
                self.payment_confirm_probability
            ));
        }
        if self.order_expiry_minutes <= 0 {
            return Err("ORDER_EXPIRY_MINUTES must be positive".into());
        }
        if self.download_ttl_hours <= 0 {
            return Err("DOWNLOAD_TTL_HOURS must be positive".into());
        }
        if self.db_namespace.trim().is_empty() || self.db_name.trim().is_empty() {
            return Err("DB_NAMESPACE and DB_NAME must not be empty".into());
        }
        Ok(())
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("storefront.db")
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 订单支付窗口 (毫秒)
    pub fn order_expiry_millis(&self) -> i64 {
        self.order_expiry_minutes * 60 * 1000
    }

    /// 下载链接有效期 (毫秒)
    pub fn download_ttl_millis(&self) -> i64 {
        self.download_ttl_hours * 60 * 60 * 1000
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
