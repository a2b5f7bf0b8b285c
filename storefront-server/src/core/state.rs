use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{AdminPolicy, BearerTokenPolicy, OpenAdminPolicy};
use crate::core::{Config, Result, ServerError};
use crate::db::{DbService, seed};
use crate::orders::{PaymentVerifier, RandomPaymentVerifier};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 启动时构造一次，通过 axum `State` 注入到每个处理器，
/// 不存在全局单例。使用 Arc 实现浅拷贝。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式文档数据库 |
/// | payment_verifier | Arc<dyn PaymentVerifier> | 支付校验能力 |
/// | admin_policy | Arc<dyn AdminPolicy> | 管理接口授权策略 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 支付校验 (可替换为真实链上校验)
    pub payment_verifier: Arc<dyn PaymentVerifier>,
    /// 管理接口授权策略
    pub admin_policy: Arc<dyn AdminPolicy>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("payment_verifier", &self.payment_verifier.name())
            .field("admin_policy", &self.admin_policy.name())
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替；测试中用于注入确定性的校验器
    pub fn new(
        config: Config,
        db: Surreal<Db>,
        payment_verifier: Arc<dyn PaymentVerifier>,
        admin_policy: Arc<dyn AdminPolicy>,
    ) -> Self {
        Self {
            config,
            db,
            payment_verifier,
            admin_policy,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 校验配置
    /// 2. 工作目录结构
    /// 3. 数据库 (work_dir/database/storefront.db)
    /// 4. 种子数据 (空集合才写入)
    /// 5. 支付校验器与管理策略
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.validate().map_err(ServerError::Config)?;

        std::fs::create_dir_all(config.database_dir())?;

        let db_path = config.database_path();
        let db_service = DbService::open(
            &db_path.to_string_lossy(),
            &config.db_namespace,
            &config.db_name,
        )
        .await
        .map_err(|e| ServerError::Database(e.to_string()))?;
        let db = db_service.db;

        seed::initialize(&db).await?;

        let payment_verifier: Arc<dyn PaymentVerifier> = Arc::new(RandomPaymentVerifier::new(
            config.payment_confirm_probability,
        ));

        Ok(Self::new(
            config.clone(),
            db,
            payment_verifier,
            Self::admin_policy_for(config),
        ))
    }

    /// 根据配置选择管理策略
    pub fn admin_policy_for(config: &Config) -> Arc<dyn AdminPolicy> {
        match &config.admin_token {
            Some(token) => {
                tracing::info!("Admin endpoints require a bearer token");
                Arc::new(BearerTokenPolicy::new(token.clone()))
            }
            None => {
                tracing::warn!("ADMIN_TOKEN not set, admin endpoints are open");
                Arc::new(OpenAdminPolicy)
            }
        }
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
