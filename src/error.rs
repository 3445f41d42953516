use thiserror::Error;

/// crate 统一错误类型。传输层与 envelope 解析的错误原样上抛，不额外包装。
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("api error: {message}")]
    Api { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
