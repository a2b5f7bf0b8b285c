//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 根路径与健康检查
//! - [`products`] - 商品目录
//! - [`orders`] - 下单、支付校验、下载
//! - [`blog`] - 博客文章
//! - [`faq`] - 常见问题
//! - [`contact`] - 联系留言
//! - [`newsletter`] - 邮件订阅
//! - [`testimonials`] - 用户评价
//! - [`stats`] - 展示用统计
//!
//! 标注 `AdminAccess` 的处理器受管理策略保护。

pub mod extract;

pub mod blog;
pub mod contact;
pub mod faq;
pub mod health;
pub mod newsletter;
pub mod orders;
pub mod products;
pub mod stats;
pub mod testimonials;

use shared::{AppError, AppResult, ErrorCode};

/// 搜索结果上限
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Minimum search length, counted in characters after trimming
pub const MIN_SEARCH_LEN: usize = 2;

/// Validate `?q=` and return the lower-cased needle
pub(crate) fn search_needle(q: &str) -> AppResult<String> {
    let q = q.trim();
    if q.chars().count() < MIN_SEARCH_LEN {
        return Err(AppError::new(ErrorCode::QueryTooShort).with_detail("min_length", MIN_SEARCH_LEN));
    }
    Ok(q.to_lowercase())
}
