use thiserror::Error;

/// 启动与运行期错误 (请求级错误使用 [`crate::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::db::repository::RepoError> for ServerError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
