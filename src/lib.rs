//! Pixiv 小说搜索客户端（Rust 实现）。
//!
//! 本 crate 负责：构造带过滤/分页参数的搜索请求、解析 ajax envelope、
//! 把松散的 JSON 结果投影为强类型领域模型（小说/作者/系列/标签）。
//!
//! 代码结构（读代码入口）：
//! - `client`：HTTP 传输与 API envelope 解析
//! - `novel`：小说领域类型与搜索（查询构造、结果映射）
//! - `user`：用户（作者）类型
//! - `json_extract`：JSON 字段防御性读取

pub mod client;
pub mod error;
pub mod json_extract;
pub mod novel;
pub mod user;

pub use error::{Error, Result};
