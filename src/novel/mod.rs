//! 小说领域类型与搜索。

use serde::{Deserialize, Serialize};

use crate::user::User;

pub mod search;

pub use search::{Lang, Order, SearchOptions, SearchResult, WorkLang, search};

/// 小说所属系列（按值嵌入，不是活引用）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub title: String,
}

/// 搜索结果中的一条小说记录，由原始 JSON 按需投影得到。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: User,
    pub text_count: i64,
    pub bookmark_count: i64,
    pub series: Series,
    pub tags: Vec<String>,
}
