//! HTTP 传输与 API envelope 解析。
//!
//! pixiv ajax 接口统一返回 `{ "error": bool, "message": string, "body": … }`，
//! `parse_api_result` 负责拆开这层 envelope；请求本身由 [`PixivClient`] 发出。

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, REFERER};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PixivClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// 登录会话 Cookie（PHPSESSID）。未登录接口可留空。
    pub phpsessid: Option<String>,
    /// 整体请求超时。None 表示不设内部超时，取消由调用方 drop future 实现。
    pub request_timeout: Option<Duration>,
    pub insecure_tls: bool,
}

impl Default for PixivClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.pixiv.net".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36".to_string(),
            phpsessid: None,
            request_timeout: None,
            insecure_tls: false,
        }
    }
}

pub struct PixivClient {
    client: Client,
    config: PixivClientConfig,
}

impl PixivClient {
    pub fn new(config: PixivClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        default_headers.insert(REFERER, HeaderValue::from_static("https://www.pixiv.net/"));
        if let Some(sessid) = &config.phpsessid {
            let cookie = format!("PHPSESSID={sessid}");
            if let Ok(mut v) = HeaderValue::from_str(&cookie) {
                v.set_sensitive(true);
                default_headers.insert(COOKIE, v);
            }
        }

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.insecure_tls);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// 把相对路径和查询参数拼成完整 URL。参数为空时不带 `?`。
    pub fn endpoint_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let base = self.config.base_url.trim().trim_end_matches('/');
        if params.is_empty() {
            format!("{base}{path}")
        } else {
            format!("{base}{path}?{}", join_params(params))
        }
    }

    /// 发送 GET 请求。非 2xx 状态按传输错误上抛。
    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("发送请求: {}", url);
        let resp = self.client.get(url).send().await?;
        debug!("响应状态: {}", resp.status().as_u16());
        Ok(resp.error_for_status()?)
    }
}

fn join_params(params: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (i, (k, v)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(k);
        out.push('=');
        out.push_str(&urlencoding::encode(v));
    }
    out
}

/// 拆开 ajax envelope：`error == true` 报 API 错误，否则取出 `body`。
/// `body` 缺失时返回 `Null`（由上层按零值降级处理）。
pub fn parse_api_result(body: &str) -> Result<Value> {
    let mut value: Value = serde_json::from_str(body)?;
    if value.get("error").and_then(Value::as_bool).unwrap_or(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        return Err(Error::Api { message });
    }
    Ok(value.get_mut("body").map(Value::take).unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_url_without_params() {
        let client = PixivClient::new(PixivClientConfig::default()).unwrap();
        assert_eq!(
            client.endpoint_url("/ajax/search/novels/magic", &[]),
            "https://www.pixiv.net/ajax/search/novels/magic"
        );
    }

    #[test]
    fn endpoint_url_joins_and_escapes_params() {
        let client = PixivClient::new(PixivClientConfig {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        })
        .unwrap();
        let params = [("p", "3".to_string()), ("lang", "zh cn".to_string())];
        assert_eq!(
            client.endpoint_url("/ajax/x", &params),
            "https://example.com/ajax/x?p=3&lang=zh%20cn"
        );
    }

    #[test]
    fn parse_api_result_unwraps_body() {
        let body = json!({"error": false, "message": "", "body": {"novel": {"data": []}}});
        let parsed = parse_api_result(&body.to_string()).unwrap();
        assert_eq!(parsed, json!({"novel": {"data": []}}));
    }

    #[test]
    fn parse_api_result_reports_api_error() {
        let body = json!({"error": true, "message": "検索に失敗しました", "body": null});
        match parse_api_result(&body.to_string()) {
            Err(Error::Api { message }) => assert_eq!(message, "検索に失敗しました"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parse_api_result_rejects_malformed_json() {
        assert!(matches!(parse_api_result("not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn parse_api_result_missing_body_is_null() {
        let parsed = parse_api_result(r#"{"error": false}"#).unwrap();
        assert!(parsed.is_null());
    }
}
