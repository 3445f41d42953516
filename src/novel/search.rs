//! 小说搜索：查询构造与结果映射。
//!
//! 查询参数按「与默认值不同才发送」的规则拼装，避免依赖远端对显式默认值的
//! 处理方式；结果侧不做 schema 校验，字段缺失一律降级为零值。

use serde_json::Value;
use tracing::debug;

use crate::client::{PixivClient, parse_api_result};
use crate::error::Result;
use crate::json_extract::{get_path, int_at, string_at, strings_at};
use crate::novel::{Novel, Series};
use crate::user::User;

/// 排序方式（按发布时间）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    DateAscending,
    DateDescending,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::DateAscending => "date",
            Order::DateDescending => "date_d",
        }
    }
}

/// 结果语言过滤（界面/结果侧）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Zh,
}

impl Lang {
    fn as_str(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
        }
    }
}

/// 作品语言过滤（作品本身的语言，区别于结果语言）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkLang {
    ZhCn,
}

impl WorkLang {
    fn as_str(self) -> &'static str {
        match self {
            WorkLang::ZhCn => "zh-cn",
        }
    }
}

/// 搜索选项。零值即全默认：第 1 页、默认排序、不过滤语言。
///
/// 用链式方法逐项覆盖，同一字段重复设置时后设置的生效：
///
/// ```
/// use pixiv_novel_client::novel::{Order, SearchOptions};
///
/// let options = SearchOptions::new().page(3).order(Order::DateDescending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// 页码，从 1 开始。0 为未设置哨兵，小于 1 一律按 1 处理。
    pub page: i64,
    pub order: Option<Order>,
    pub lang: Option<Lang>,
    pub work_lang: Option<WorkLang>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn work_lang(mut self, work_lang: WorkLang) -> Self {
        self.work_lang = Some(work_lang);
        self
    }

    /// 与默认值相同的参数不发送：第 1 页不带 `p`，未指定的枚举不带对应参数。
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let page = if self.page < 1 { 1 } else { self.page };

        let mut params = Vec::new();
        if page != 1 {
            params.push(("p", page.to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_str().to_string()));
        }
        if let Some(lang) = self.lang {
            params.push(("lang", lang.as_str().to_string()));
        }
        if let Some(work_lang) = self.work_lang {
            params.push(("work_lang", work_lang.as_str().to_string()));
        }
        params
    }
}

/// 一次搜索的原始结果。持有拆开 envelope 后的 JSON 文档，访问器按需投影，
/// 不缓存派生数据。
#[derive(Debug, Clone)]
pub struct SearchResult {
    json: Value,
}

impl SearchResult {
    pub fn new(json: Value) -> Self {
        Self { json }
    }

    /// 拆开 envelope 后的原始 JSON 文档。
    pub fn raw(&self) -> &Value {
        &self.json
    }

    /// 按文档顺序遍历 `novel.data` 的原始条目。迭代器返回 false 时提前终止，
    /// 供只需要部分条目、不想构造完整投影的调用方使用。
    pub fn for_each<F>(&self, mut iterator: F)
    where
        F: FnMut(usize, &Value) -> bool,
    {
        let Some(items) = get_path(&self.json, "novel.data").and_then(Value::as_array) else {
            return;
        };
        for (index, item) in items.iter().enumerate() {
            if !iterator(index, item) {
                break;
            }
        }
    }

    /// 结果中的小说列表，保持文档顺序（即平台侧的排序）。
    /// 字段缺失或类型不符不报错，降级为零值。
    pub fn novels(&self) -> Vec<Novel> {
        let reported = get_path(&self.json, "novel.data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let mut novels = Vec::with_capacity(reported);

        self.for_each(|_, value| {
            novels.push(Novel {
                id: string_at(value, "id"),
                title: string_at(value, "title"),
                // 线上返回的 Description 字段首字母大写，与同级字段风格不一致，
                // 按实际 wire 格式读取，不要"修正"。
                description: string_at(value, "Description"),
                author: User {
                    id: string_at(value, "userId"),
                    name: string_at(value, "userName"),
                },
                text_count: int_at(value, "textCount"),
                bookmark_count: int_at(value, "bookmarkCount"),
                series: Series {
                    id: string_at(value, "seriesId"),
                    title: string_at(value, "seriesTitle"),
                },
                tags: strings_at(value, "tags"),
            });
            true
        });
        novels
    }
}

/// 调用 pixiv 小说搜索接口。
///
/// 传输错误与 envelope 错误原样上抛，不重试；取消通过 drop future 实现。
pub async fn search(
    client: &PixivClient,
    query: &str,
    options: SearchOptions,
) -> Result<SearchResult> {
    let path = format!("/ajax/search/novels/{}", urlencoding::encode(query));
    let url = client.endpoint_url(&path, &options.query_params());
    debug!("搜索小说: {}", query);

    let resp = client.get(&url).await?;
    let text = resp.text().await?;
    let body = parse_api_result(&text)?;
    Ok(SearchResult::new(body))
}
